//! Penalty table with search, status/violation filters, and sortable headers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every control mutates the shared [`PenaltyTable`] controller and then
//! pushes fresh rows to the body through [`RowsSurface`]. The body itself only
//! renders whatever rows it was last given.

use leptos::prelude::*;
use ledger::table::COLUMNS;
use ledger::{PenaltyTable, SortDirection, StatusFilter, TableRow, ViolationFilter};

use crate::state::penalties::RowsSurface;

/// The "Penalties" section.
#[component]
pub fn PenaltyTableSection() -> impl IntoView {
    let table = expect_context::<RwSignal<PenaltyTable>>();
    let rows = expect_context::<RwSignal<Vec<TableRow>>>();

    let refresh = move || table.with_untracked(|t| t.refresh(&mut RowsSurface(rows)));

    view! {
        <section id="penalties" class="section penalties">
            <h2 class="section__title">"Penalty Records"</h2>

            <div class="table-controls">
                <input
                    id="search-input"
                    type="search"
                    placeholder="Search by name or ID..."
                    prop:value=move || table.with(|t| t.criteria().search.clone())
                    on:input=move |ev| {
                        let term = event_target_value(&ev);
                        table.update(|t| t.set_search(term));
                        refresh();
                    }
                />
                <select
                    id="status-filter"
                    on:change=move |ev| {
                        let status = StatusFilter::from_value(&event_target_value(&ev));
                        table.update(|t| t.set_status_filter(status));
                        refresh();
                    }
                >
                    <option value="all">"All Status"</option>
                    <option value="paid">"Paid"</option>
                    <option value="unpaid">"Unpaid"</option>
                </select>
                <select
                    id="violation-filter"
                    on:change=move |ev| {
                        let violation = ViolationFilter::from_value(&event_target_value(&ev));
                        table.update(|t| t.set_violation_filter(violation));
                        refresh();
                    }
                >
                    <option value="all">"All Violations"</option>
                    <option value="minor">"Minor"</option>
                    <option value="major">"Major"</option>
                </select>
            </div>

            <div class="table-wrapper">
                <table class="penalty-table">
                    <thead>
                        <tr>
                            {COLUMNS
                                .iter()
                                .map(|(field, label)| {
                                    let field = *field;
                                    view! {
                                        <th
                                            data-sort=field.key()
                                            class=move || table.with(|t| t.header_class(field))
                                            aria-sort=move || {
                                                table
                                                    .with(|t| {
                                                        t.sort_state()
                                                            .direction_of(field)
                                                            .map_or("none", SortDirection::aria)
                                                    })
                                            }
                                            on:click=move |_| {
                                                table.update(|t| {
                                                    t.sort_by(field);
                                                });
                                                refresh();
                                            }
                                        >
                                            {*label}
                                        </th>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </tr>
                    </thead>
                    <tbody>
                        <For each=move || rows.get() key=|row| row.id.clone() let:row>
                            <PenaltyRow row=row/>
                        </For>
                    </tbody>
                </table>
                <Show when=move || rows.with(Vec::is_empty)>
                    <p class="table-empty">"No matching records."</p>
                </Show>
            </div>
        </section>
    }
}

#[component]
fn PenaltyRow(row: TableRow) -> impl IntoView {
    let cells = row.text_cells().map(str::to_owned);
    view! {
        <tr>
            {cells.into_iter().map(|cell| view! { <td>{cell}</td> }).collect::<Vec<_>>()}
            <td>
                <span class=row.status_class>{row.status_label}</span>
            </td>
        </tr>
    }
}
