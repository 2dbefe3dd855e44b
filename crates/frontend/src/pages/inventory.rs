use contracts::domain::a104_inventory_item::aggregate::InventoryItem;
use leptos::prelude::*;
use thaw::BadgeColor;

use super::entity_list::{badge, entity_table, page_header, Collection, Column};
use crate::shared::format::format_money;

#[component]
pub fn InventoryPage() -> impl IntoView {
    let items = Collection::<InventoryItem>::load();
    let low_stock = Memo::new(move |_| items.count(InventoryItem::is_low_stock));

    let columns = vec![
        Column::text("Item", |i: &InventoryItem| i.name.clone()),
        Column::text("SKU", |i: &InventoryItem| i.sku.clone()),
        Column::text("Category", |i: &InventoryItem| i.category.clone()),
        Column::text("Quantity", |i: &InventoryItem| format!("{} {}", i.quantity, i.unit)),
        Column::text("Min stock", |i: &InventoryItem| i.min_stock.to_string()),
        Column::text("Unit price", |i: &InventoryItem| format_money(i.unit_price)),
        Column::text("Value", |i: &InventoryItem| format_money(i.stock_value())),
        Column::text("Supplier", |i: &InventoryItem| i.supplier.clone()),
        Column::view("Stock", |i: &InventoryItem| {
            if i.is_low_stock() {
                badge("Low stock", BadgeColor::Danger)
            } else {
                badge("In stock", BadgeColor::Success)
            }
        }),
    ];

    view! {
        <div class="page">
            {page_header("Inventory", "Parts and consumables on hand.", items)}
            <Show when=move || { low_stock.get() > 0 }>
                <div class="warning-box">
                    {move || format!("{} item(s) at or below minimum stock", low_stock.get())}
                </div>
            </Show>
            {entity_table(items, columns, None)}
        </div>
    }
}
