//! Fetching and tabulating one REST collection.

use contracts::domain::Resource;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::layout::notifications::{use_notifications, Notifications};
use crate::shared::icons::icon;
use crate::system::auth::context::{use_auth, AuthContext};

/// Items of one collection, loaded with the session's token.
pub struct Collection<R: Send + Sync + 'static> {
    pub items: RwSignal<Option<Vec<R>>>,
    pub error: RwSignal<Option<String>>,
    auth: AuthContext,
    notifications: Notifications,
}

impl<R: Send + Sync + 'static> Clone for Collection<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Send + Sync + 'static> Copy for Collection<R> {}

impl<R: Resource + Send + Sync> Collection<R> {
    /// Create and start the first fetch. Call inside a component.
    pub fn load() -> Self {
        let collection = Self {
            items: RwSignal::new(None),
            error: RwSignal::new(None),
            auth: use_auth(),
            notifications: use_notifications(),
        };
        collection.refresh();
        collection
    }

    pub fn refresh(&self) {
        let this = *self;
        let client = self.auth.client();
        spawn_local(async move {
            match client.list::<R>().await {
                Ok(items) => {
                    this.items.set(Some(items));
                    this.error.set(None);
                }
                Err(e) => {
                    log::warn!("Loading {} failed: {}", R::collection_name(), e);
                    this.notifications
                        .error(format!("Could not load {}", R::list_name().to_lowercase()));
                    this.error.set(Some(e.user_message()));
                }
            }
        });
    }

    /// Items matching `filter`, empty while loading
    pub fn count(&self, filter: impl Fn(&R) -> bool) -> usize {
        self.items.with(|items| {
            items
                .as_ref()
                .map(|items| items.iter().filter(|item| filter(item)).count())
                .unwrap_or(0)
        })
    }
}

type CellFn<R> = Box<dyn Fn(&R) -> AnyView + Send + Sync>;

pub struct Column<R> {
    header: &'static str,
    cell: CellFn<R>,
}

impl<R: 'static> Column<R> {
    pub fn text(header: &'static str, cell: fn(&R) -> String) -> Self {
        Self {
            header,
            cell: Box::new(move |item| cell(item).into_any()),
        }
    }

    pub fn view(header: &'static str, cell: impl Fn(&R) -> AnyView + Send + Sync + 'static) -> Self {
        Self {
            header,
            cell: Box::new(cell),
        }
    }
}

/// Page header with a refresh button
pub fn page_header<R: Resource + Send + Sync>(
    title: &'static str,
    subtitle: &'static str,
    collection: Collection<R>,
) -> impl IntoView {
    view! {
        <div class="header">
            <div class="header__content">
                <h1 class="header__title">{title}</h1>
                <p class="header__subtitle">{subtitle}</p>
            </div>
            <div class="header__actions">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| collection.refresh()>
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </div>
        </div>
    }
}

/// Table of a collection; `filter` narrows the rows shown.
pub fn entity_table<R: Resource + Send + Sync>(
    collection: Collection<R>,
    columns: Vec<Column<R>>,
    filter: Option<fn(&R) -> bool>,
) -> impl IntoView {
    let columns = StoredValue::new(columns);

    move || {
        let error = collection.error.get();
        match collection.items.get() {
            None => match error {
                Some(message) => view! { <div class="error-box">{message}</div> }.into_any(),
                None => view! { <Spinner /> }.into_any(),
            },
            Some(items) => {
                let rows: Vec<R> = items
                    .into_iter()
                    .filter(|item| filter.map(|f| f(item)).unwrap_or(true))
                    .collect();
                if rows.is_empty() {
                    return view! { <div class="empty-state">"No records"</div> }.into_any();
                }
                view! {
                    <Table>
                        <TableHeader>
                            <TableRow>
                                {columns.with_value(|cols| {
                                    cols.iter()
                                        .map(|c| {
                                            let header = c.header;
                                            view! { <TableHeaderCell>{header}</TableHeaderCell> }
                                        })
                                        .collect_view()
                                })}
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {rows.into_iter().map(|item| {
                                let cells = columns.with_value(|cols| {
                                    cols.iter()
                                        .map(|c| {
                                            let cell = (c.cell)(&item);
                                            view! {
                                                <TableCell>
                                                    <TableCellLayout>{cell}</TableCellLayout>
                                                </TableCell>
                                            }
                                        })
                                        .collect_view()
                                });
                                view! { <TableRow>{cells}</TableRow> }
                            }).collect_view()}
                        </TableBody>
                    </Table>
                }
                .into_any()
            }
        }
    }
}

/// Colored status label
pub fn badge(label: &'static str, color: BadgeColor) -> AnyView {
    view! {
        <Badge appearance=BadgeAppearance::Tint color=color>
            {label}
        </Badge>
    }
    .into_any()
}
