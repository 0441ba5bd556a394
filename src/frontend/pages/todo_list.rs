use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use todo_web::todo::TodoItem;

use crate::components::TodoRow;
use crate::storage::{load_todos, save_todos};

#[component]
pub fn TodoList() -> impl IntoView {
    let todos = RwSignal::new(load_todos());
    let new_title = RwSignal::new(String::new());
    let (error, set_error) = signal(None::<String>);

    // Persist on every change
    Effect::new(move || todos.with(save_todos));

    let add_todo = move |ev: SubmitEvent| {
        ev.prevent_default();
        let title = new_title.get_untracked();

        let mut result = Ok(());
        todos.update(|list| result = list.add(&title).map(|_| ()));

        match result {
            Ok(()) => {
                new_title.set(String::new());
                set_error.set(None);
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    let on_toggle = Callback::new(move |id: u64| {
        todos.update(|list| {
            if let Err(e) = list.toggle(id) {
                web_sys::console::error_1(&e.to_string().into());
            }
        });
    });

    let on_remove = Callback::new(move |id: u64| {
        todos.update(|list| {
            if let Err(e) = list.remove(id) {
                web_sys::console::error_1(&e.to_string().into());
            }
        });
    });

    let remaining_label = move || {
        let remaining = todos.with(|list| list.remaining());
        let noun = if remaining == 1 { "item" } else { "items" };
        format!("{} {} left", remaining, noun)
    };

    view! {
        <div class="container mx-auto max-w-xl p-6">
            <h2 class="text-3xl font-bold mb-4">"Todo-List"</h2>

            <form on:submit=add_todo class="flex gap-2 mb-2">
                <input
                    type="text"
                    placeholder="What needs to be done?"
                    bind:value=new_title
                    class="flex-1 px-3 py-2 border rounded"
                />
                <button type="submit" class="px-4 py-2 border rounded">
                    "Add"
                </button>
            </form>

            {move || error.get().map(|msg| view! { <p class="text-sm text-red-600 mb-2">{msg}</p> })}

            <Show
                when=move || todos.with(|list| !list.is_empty())
                fallback=|| view! { <p class="text-gray-500 py-4">"Nothing to do yet."</p> }
            >
                <ul class="mb-4">
                    <For
                        each=move || todos.with(|list| list.items().to_vec())
                        key=|item: &TodoItem| (item.id, item.completed)
                        children=move |item: TodoItem| {
                            view! { <TodoRow item=item on_toggle=on_toggle on_remove=on_remove/> }
                        }
                    />
                </ul>
            </Show>

            <div class="flex justify-between items-center text-sm mb-6">
                <span>{remaining_label}</span>
                <button
                    class="px-3 py-1 border rounded disabled:opacity-50"
                    disabled=move || todos.with(|list| list.remaining() == list.len())
                    on:click=move |_| {
                        todos.update(|list| {
                            list.clear_completed();
                        });
                    }
                >
                    "Clear completed"
                </button>
            </div>

            <A href="/">"← Home"</A>
        </div>
    }
}
