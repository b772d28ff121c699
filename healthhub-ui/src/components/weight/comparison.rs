//! Two-user weight comparison

use healthhub::compare::sort_by_date;
use healthhub::query::{Sort, SortKey, SortOrder};
use leptos::*;

use crate::state::use_weight_state;
use crate::state::weight::sort_indicator;

#[component]
pub fn WeightComparison() -> impl IntoView {
    let weight = use_weight_state();

    let date_order = create_rw_signal(SortOrder::Ascending);

    let rows = create_memo(move |_| {
        let pair = weight.compare.get();
        let mut rows = weight.directory.with(|dir| pair.rows(dir));
        sort_by_date(&mut rows, date_order.get());
        rows
    });

    // Column title for the left or right user
    let username = move |left: bool| {
        let pair = weight.compare.get();
        let id = if left { pair.left } else { pair.right };
        weight
            .directory
            .with(|dir| dir.username(&id).map(str::to_string))
            .unwrap_or(id)
    };

    let select_class = "w-48 rounded-lg border border-gray-300 px-3 py-2";

    view! {
        <div class="space-y-6">
            <div class="flex items-center space-x-4">
                <select
                    on:change=move |ev| weight.set_compare_left(&event_target_value(&ev))
                    class=select_class
                >
                    {move || weight.directory.with(|dir| {
                        let left = weight.compare.with(|p| p.left.clone());
                        dir.users().iter().map(|user| view! {
                            <option value=user.user_id.clone() selected=user.user_id == left>
                                {user.username.clone()}
                            </option>
                        }).collect_view()
                    })}
                </select>

                <span class="text-lg font-semibold">"VS"</span>

                <select
                    on:change=move |ev| weight.set_compare_right(&event_target_value(&ev))
                    class=select_class
                >
                    {move || weight.directory.with(|dir| {
                        let pair = weight.compare.get();
                        dir.others(&pair.left).map(|user| view! {
                            <option value=user.user_id.clone() selected=user.user_id == pair.right>
                                {user.username.clone()}
                            </option>
                        }).collect_view()
                    })}
                </select>

                <button
                    on:click=move |_| weight.compare.update(|p| *p = p.clone().swapped())
                    class="px-3 py-2 rounded-lg border border-gray-300 hover:bg-gray-50"
                    title="Swap"
                >
                    "⇄"
                </button>
            </div>

            <div class="bg-white rounded-xl shadow overflow-x-auto">
                <table class="w-full text-left border-collapse">
                    <thead class="bg-gray-50 text-sm text-gray-600">
                        <tr>
                            <th
                                class="px-4 py-3 cursor-pointer select-none"
                                on:click=move |_| date_order.update(|o| *o = o.toggled())
                            >
                                "Date"
                                {move || sort_indicator(Some(Sort { key: SortKey::Date, order: date_order.get() }), SortKey::Date)}
                            </th>
                            <th class="px-4 py-3 text-center">{move || username(true)}</th>
                            <th class="px-4 py-3 text-center">{move || username(false)}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = rows.get();
                            if rows.is_empty() {
                                view! {
                                    <tr>
                                        <td colspan="3" class="px-4 py-8 text-center text-gray-400">
                                            "No records for either user"
                                        </td>
                                    </tr>
                                }.into_view()
                            } else {
                                rows.into_iter().map(|row| view! {
                                    <tr class="border-t border-gray-100">
                                        <td class="px-4 py-3">{row.date.to_string()}</td>
                                        <td class="px-4 py-3 text-center">{row.user1}</td>
                                        <td class="px-4 py-3 text-center">{row.user2}</td>
                                    </tr>
                                }).collect_view()
                            }
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
