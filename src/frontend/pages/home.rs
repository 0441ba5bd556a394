use leptos::prelude::*;
use leptos_router::components::A;
use todo_web::page::{HOME_CONTAINER_CLASS, HOME_GREETING, TODO_LIST_LABEL, TODO_LIST_PATH};

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <main class=HOME_CONTAINER_CLASS>
            {HOME_GREETING}
            <A href=TODO_LIST_PATH>{TODO_LIST_LABEL}</A>
        </main>
    }
}
