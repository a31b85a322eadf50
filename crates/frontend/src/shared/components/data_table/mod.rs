//! Generic server-driven data table.
//!
//! The page owns the data: it receives [`FetchParams`] through `fetch_data`,
//! loads the page and feeds `rows` / `total_count` / `is_loading` back in.
//! Pagination, sorting, search debounce and export are handled here.

pub mod columns;
pub mod remote;
pub mod state;

pub use columns::{BodyState, ColumnDef, DataRow, RowActionState};
pub use remote::RemoteList;
pub use state::{page_count, FetchParams, PageMove, ResponseGate, TableConfig, TableEngine};

use crate::layout::notifications::Notifications;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::config as app_config;
use crate::shared::export::{download_bytes, export_file_name, ExportCell, ExportFormat, ExportTable};
use crate::shared::icons::icon;
use columns::{sort_class, sort_indicator};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;
use state::serial_number;
use thaw::*;

/// Column plus an optional custom cell renderer
pub struct TableColumn<T: 'static> {
    pub def: ColumnDef,
    pub render: Option<Callback<T, AnyView>>,
}

impl<T: 'static> Clone for TableColumn<T> {
    fn clone(&self) -> Self {
        Self {
            def: self.def.clone(),
            render: self.render.clone(),
        }
    }
}

impl<T: DataRow> TableColumn<T> {
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            def: ColumnDef::new(key, header),
            render: None,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.def = self.def.sortable();
        self
    }

    pub fn render(mut self, f: impl Fn(T) -> AnyView + Send + Sync + 'static) -> Self {
        self.render = Some(Callback::new(f));
        self
    }
}

/// Row handlers. The actions column is rendered only when at least one is set.
pub struct RowActions<T: 'static> {
    pub on_edit: Option<Callback<T>>,
    pub on_toggle_status: Option<Callback<(T, bool)>>,
    pub on_upload_images: Option<Callback<T>>,
}

impl<T: 'static> Clone for RowActions<T> {
    fn clone(&self) -> Self {
        Self {
            on_edit: self.on_edit.clone(),
            on_toggle_status: self.on_toggle_status.clone(),
            on_upload_images: self.on_upload_images.clone(),
        }
    }
}

impl<T: 'static> Default for RowActions<T> {
    fn default() -> Self {
        Self {
            on_edit: None,
            on_toggle_status: None,
            on_upload_images: None,
        }
    }
}

impl<T: 'static> RowActions<T> {
    pub fn is_empty(&self) -> bool {
        self.on_edit.is_none() && self.on_toggle_status.is_none() && self.on_upload_images.is_none()
    }
}

fn default_cell(row: &Value, key: &str) -> String {
    ExportCell::from_value(row.get(key)).display()
}

#[component]
pub fn DataTable<T>(
    columns: Vec<TableColumn<T>>,
    #[prop(into)] rows: Signal<Vec<T>>,
    #[prop(into)] total_count: Signal<usize>,
    #[prop(into)] is_loading: Signal<bool>,
    /// Called with the current parameters on mount and after every change
    fetch_data: Callback<FetchParams>,
    #[prop(optional)] actions: RowActions<T>,
    #[prop(optional, into)] search_placeholder: Option<String>,
    #[prop(optional)] config: Option<TableConfig>,
) -> impl IntoView
where
    T: DataRow,
{
    let table_config = config.unwrap_or_else(|| app_config().table.clone());
    let debounce_ms = table_config.search_debounce_ms;
    let page_sizes = table_config.page_sizes.clone();
    let engine = RwSignal::new(TableEngine::new(table_config));
    let notifications = use_context::<Notifications>();

    let has_actions = !actions.is_empty();
    let columns = StoredValue::new(columns);
    let actions = StoredValue::new(actions);
    let span = columns.with_value(|c| c.len()) + 1 + usize::from(has_actions);

    let pages = Signal::derive(move || {
        page_count(total_count.get(), engine.with(|e| e.state().page_size))
    });

    let emit = move |params: Option<FetchParams>| {
        if let Some(params) = params {
            log::debug!(
                "data table: fetch #{} page={} size={} sort={:?} {} search={:?}",
                params.request_id,
                params.page_index,
                params.page_size,
                params.sort_by,
                params.sort_order.as_str(),
                params.search
            );
            fetch_data.run(params);
        }
    };

    Effect::new(move |_| {
        untrack(move || emit(engine.try_update(|e| e.mount())));
    });

    let on_search_input = move |text: String| {
        let Some(ticket) = engine.try_update(|e| e.input_search(text)) else {
            return;
        };
        spawn_local(async move {
            TimeoutFuture::new(debounce_ms).await;
            emit(engine.try_update(|e| e.settle_search(ticket)).flatten());
        });
    };

    let on_navigate = Callback::new(move |movement: PageMove| {
        let count = pages.get_untracked();
        emit(engine.try_update(|e| e.navigate(movement, count)).flatten());
    });

    let on_page_size_change = Callback::new(move |size: usize| {
        emit(engine.try_update(|e| e.set_page_size(size)).flatten());
    });

    let export = move |format: ExportFormat| {
        let (page_index, page_size) =
            engine.with_untracked(|e| (e.state().page_index, e.state().page_size));
        let current = rows.get_untracked();
        if !BodyState::of(is_loading.get_untracked(), current.len()).can_export() {
            return;
        }
        let Some(table) = ExportTable::from_serializable(&current, page_index, page_size) else {
            log::info!("data table: nothing to export");
            return;
        };
        let file_name = export_file_name(format, chrono::Utc::now().date_naive());
        let result = format
            .encode(&table)
            .map_err(|e| e.to_string())
            .and_then(|bytes| download_bytes(&bytes, &file_name, format.mime_type()));
        if let Err(e) = result {
            log::error!("data table: export to {} failed: {}", format.label(), e);
            if let Some(n) = notifications {
                n.error(Some(&format!("Export failed: {}", e)));
            }
        }
    };

    let header = move || {
        columns.with_value(|cols| {
            cols.iter()
                .map(|column| {
                    let def = column.def.clone();
                    if !def.sortable {
                        return view! { <TableHeaderCell>{def.header}</TableHeaderCell> }.into_any();
                    }
                    let key = def.key.clone();
                    let key_for_class = def.key.clone();
                    let label = def.header.clone();
                    view! {
                        <TableHeaderCell>
                            <div
                                class="table__sortable-header"
                                style="cursor: pointer;"
                                on:click=move |_| emit(engine.try_update(|e| e.toggle_sort(&def)).flatten())
                            >
                                {label}
                                <span class=move || {
                                    engine.with(|e| sort_class(e.state().sort_by.as_deref(), &key_for_class))
                                }>
                                    {move || {
                                        engine.with(|e| {
                                            sort_indicator(e.state().sort_by.as_deref(), e.state().sort_order, &key)
                                        })
                                    }}
                                </span>
                            </div>
                        </TableHeaderCell>
                    }
                    .into_any()
                })
                .collect_view()
        })
    };

    let render_actions = move |row: T| {
        let acts = actions.get_value();
        let row_state = RowActionState::for_row(row.is_active().unwrap_or(true));
        let toggle = acts.on_toggle_status.map(|cb| {
            let row = row.clone();
            view! {
                <label class="status-toggle" title="Toggle status">
                    <input
                        type="checkbox"
                        prop:checked=row_state.checked
                        disabled=!row_state.toggle_enabled
                        on:change=move |ev| {
                            // the switch follows the row data, which a reload brings back
                            event_target::<web_sys::HtmlInputElement>(&ev).set_checked(row_state.checked);
                            cb.run((row.clone(), row_state.next_status))
                        }
                    />
                    <span class="status-toggle__slider"></span>
                </label>
            }
        });
        let edit = acts.on_edit.map(|cb| {
            let row = row.clone();
            view! {
                <button
                    class="table__action-btn"
                    title="Edit"
                    disabled=!row_state.edit_enabled
                    on:click=move |_| cb.run(row.clone())
                >
                    {icon("edit")}
                </button>
            }
        });
        let upload = acts.on_upload_images.map(|cb| {
            let row = row.clone();
            view! {
                <button
                    class="table__action-btn"
                    title="Upload images"
                    disabled=!row_state.upload_enabled
                    on:click=move |_| cb.run(row.clone())
                >
                    {icon("upload")}
                </button>
            }
        });
        view! {
            <TableCell>
                <div class="table__row-actions">{toggle}{edit}{upload}</div>
            </TableCell>
        }
    };

    let body = move || {
        let current = rows.get();
        match BodyState::of(is_loading.get(), current.len()) {
            BodyState::Loading => view! {
                <TableRow>
                    <TableCell attr:colspan=span.to_string()>
                        <div class="table__placeholder"><Spinner /></div>
                    </TableCell>
                </TableRow>
            }
            .into_any(),
            BodyState::Empty => view! {
                <TableRow>
                    <TableCell attr:colspan=span.to_string()>
                        <div class="table__placeholder">"No data"</div>
                    </TableCell>
                </TableRow>
            }
            .into_any(),
            BodyState::Rows => {
                let (page_index, page_size) =
                    engine.with_untracked(|e| (e.state().page_index, e.state().page_size));
                current
                    .into_iter()
                    .enumerate()
                    .map(|(i, row)| {
                        let serialized = serde_json::to_value(&row).unwrap_or(Value::Null);
                        let cells = columns.with_value(|cols| {
                            cols.iter()
                                .map(|column| {
                                    let content = match &column.render {
                                        Some(render) => render.run(row.clone()),
                                        None => default_cell(&serialized, &column.def.key).into_any(),
                                    };
                                    view! {
                                        <TableCell>
                                            <TableCellLayout>{content}</TableCellLayout>
                                        </TableCell>
                                    }
                                })
                                .collect_view()
                        });
                        let action_cell = has_actions.then(|| render_actions(row.clone()));
                        view! {
                            <TableRow>
                                <TableCell>{serial_number(page_index, page_size, i)}</TableCell>
                                {cells}
                                {action_cell}
                            </TableRow>
                        }
                    })
                    .collect_view()
                    .into_any()
            }
        }
    };

    let placeholder = search_placeholder.unwrap_or_else(|| "Search...".to_string());

    view! {
        <div class="data-table">
            <div class="data-table__toolbar">
                <input
                    type="search"
                    class="data-table__search"
                    placeholder=placeholder
                    prop:value=move || engine.with(|e| e.search_input().to_string())
                    on:input=move |ev| on_search_input(event_target_value(&ev))
                />
                <div class="data-table__export">
                    {ExportFormat::ALL
                        .iter()
                        .map(|&format| {
                            view! {
                                <Button
                                    appearance=ButtonAppearance::Subtle
                                    disabled=Signal::derive(move || {
                                        !BodyState::of(is_loading.get(), rows.with(Vec::len)).can_export()
                                    })
                                    on_click=move |_| export(format)
                                >
                                    {icon("download")}
                                    {format.label()}
                                </Button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"#"</TableHeaderCell>
                            {header}
                            {has_actions.then(|| view! { <TableHeaderCell>"Actions"</TableHeaderCell> })}
                        </TableRow>
                    </TableHeader>
                    <TableBody>{body}</TableBody>
                </Table>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || engine.with(|e| e.state().page_index))
                total_pages=pages
                total_count=total_count
                page_size=Signal::derive(move || engine.with(|e| e.state().page_size))
                on_navigate=on_navigate
                on_page_size_change=on_page_size_change
                page_size_options=page_sizes
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_cell_formats_json_values() {
        let row = json!({"name": "Shoes", "price": 12.5, "active": false, "note": null});
        assert_eq!(default_cell(&row, "name"), "Shoes");
        assert_eq!(default_cell(&row, "price"), "12.5");
        assert_eq!(default_cell(&row, "active"), "false");
        assert_eq!(default_cell(&row, "note"), "");
        assert_eq!(default_cell(&row, "missing"), "");
    }

    #[test]
    fn test_row_actions_presence() {
        let mut actions: RowActions<String> = RowActions::default();
        assert!(actions.is_empty());
        actions.on_edit = Some(Callback::new(|_: String| {}));
        assert!(!actions.is_empty());
    }
}
