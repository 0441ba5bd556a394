use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::pages::{Home, TodoList};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="todo-web"/>
        <Router>
            <Routes fallback=|| view! { <p class="p-6">"Page not found"</p> }>
                <Route path=path!("/") view=Home/>
                <Route path=path!("/todo-list") view=TodoList/>
            </Routes>
        </Router>
    }
}
