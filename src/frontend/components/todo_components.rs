use leptos::prelude::*;
use todo_web::todo::TodoItem;

#[component]
pub fn TodoRow(
    item: TodoItem,
    /// Called with the item id when the checkbox changes
    on_toggle: Callback<u64>,
    /// Called with the item id when the remove button is clicked
    on_remove: Callback<u64>,
) -> impl IntoView {
    let id = item.id;

    view! {
        <li class="flex items-center gap-3 py-2 border-b">
            <input
                type="checkbox"
                prop:checked=item.completed
                on:change=move |_| on_toggle.run(id)
            />
            <span class="flex-1" class:line-through=item.completed>
                {item.title}
            </span>
            <button
                class="text-sm px-2 hover:text-red-600"
                title="Remove"
                on:click=move |_| on_remove.run(id)
            >
                "✕"
            </button>
        </li>
    }
}
