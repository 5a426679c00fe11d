//! Product detail page shown behind the overlay after a commit.

use crate::domain::Product;
use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;

const LEFT_MARGIN: usize = 4;

/// Renders the detail view of `product` starting at `row`.
///
/// ```text
///     Smart Feeder Pro                      [Bestseller]
///     Smart Feeders
///     $149.00  $179.00 -17%     ★ 4.8 (1240 reviews)
///
///     App-controlled portions for every meal
///
///     • Wi-Fi scheduling
///     • Voice recorder
/// ```
pub fn render_product_detail(row: usize, product: &Product, theme: &Theme, rows: usize, cols: usize) {
    let width = cols.saturating_sub(LEFT_MARGIN * 2);
    let mut current_row = row;
    let mut line = |text: String, style: String| {
        if current_row < rows {
            position_cursor(current_row, LEFT_MARGIN + 1);
            print!("{style}{text}{}", Theme::reset());
        }
        current_row += 1;
    };

    let title = match &product.badge {
        Some(badge) => format!("{}  [{badge}]", product.name),
        None => product.name.clone(),
    };
    line(
        truncate(&title, width),
        format!("{}{}", Theme::bold(), theme.colors.header_fg.fg()),
    );
    line(
        product.category.label().to_string(),
        theme.colors.text_dim.fg(),
    );

    let mut price = product.price_label();
    if let (Some(original), Some(percent)) = (product.original_price, product.discount_percent()) {
        price.push_str(&format!("  ${original:.2} -{percent}%"));
    }
    if let Some(rating) = product.rating {
        price.push_str(&format!("     ★ {rating:.1} ({} reviews)", product.reviews));
    }
    line(truncate(&price, width), theme.colors.price_fg.fg());
    line(String::new(), String::new());

    if let Some(description) = &product.short_description {
        line(truncate(description, width), theme.colors.text_normal.fg());
        line(String::new(), String::new());
    }

    for feature in &product.features {
        line(
            truncate(&format!("• {feature}"), width),
            theme.colors.text_normal.fg(),
        );
    }
}
