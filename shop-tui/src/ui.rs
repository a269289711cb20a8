//! Screen rendering
//!
//! 每个屏幕一个渲染函数；布局都是 头部 / 主体 / 底部提示 三段。

use ratatui::{prelude::*, widgets::*};

use shop_client::FREE_SHIPPING_THRESHOLD;

use crate::app::{App, Screen};
use crate::forms::Form;

const LABEL_WIDTH: usize = 16;

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Body
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    draw_header(f, app, chunks[0]);

    match app.screen {
        Screen::Catalog => draw_catalog(f, app, chunks[1]),
        Screen::Detail => draw_detail(f, app, chunks[1]),
        Screen::Cart => draw_cart(f, app, chunks[1]),
        Screen::Checkout => draw_checkout(f, app, chunks[1]),
        Screen::OrderPlaced => draw_order_placed(f, app, chunks[1]),
        Screen::Admin => draw_admin(f, app, chunks[1]),
    }

    draw_footer(f, app, chunks[2]);

    // 管理表单和删除确认以弹层呈现
    if app.screen == Screen::Admin {
        if app.admin_form.is_some() {
            draw_admin_form(f, app);
        } else if app.confirm_delete.is_some() {
            draw_confirm_delete(f, app);
        }
    }

    // 阻塞提示最后画，盖住一切
    if let Some(message) = app.alert.clone() {
        draw_alert(f, &message);
    }
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let screen_name = match app.screen {
        Screen::Catalog => "Catalog",
        Screen::Detail => "Product",
        Screen::Cart => "Shopping Cart",
        Screen::Checkout => "Checkout",
        Screen::OrderPlaced => "Order Confirmed",
        Screen::Admin => "Admin Dashboard",
    };

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            " 🛒 ShopHub ",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::raw("| "),
        Span::styled(screen_name, Style::default().fg(Color::Cyan)),
        Span::raw("  |  "),
        Span::styled(
            format!("Cart: {} items", app.cart.item_count()),
            Style::default().fg(Color::Green),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(title, area);
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let hints = match app.screen {
        Screen::Catalog => {
            if app.searching {
                "Type to search | Enter apply | Esc clear"
            } else {
                "↑↓ select | ←→ category | s sort | / search | Enter details | a add | c cart | m admin | q quit"
            }
        }
        Screen::Detail => "+/- quantity | a add to cart | c cart | Esc back",
        Screen::Cart => "↑↓ select | +/- quantity | x remove | Enter checkout | Esc back",
        Screen::Checkout => "Tab/↑↓ fields | Enter place order | Esc back",
        Screen::OrderPlaced => "Enter continue shopping",
        Screen::Admin => "↑↓ select | n new | e edit | d delete | r refresh | Esc back",
    };

    let mut line = vec![Span::styled(hints, Style::default().fg(Color::DarkGray))];
    if let Some(notice) = &app.notice {
        line.push(Span::raw("   "));
        line.push(Span::styled(
            &notice.text,
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ));
    }

    let footer = Paragraph::new(Line::from(line)).block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}

// ========== Catalog ==========

fn draw_catalog(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tabs + sort
            Constraint::Length(3), // Search
            Constraint::Min(1),    // Product table
        ])
        .split(area);

    // Category tabs
    let mut titles: Vec<String> = vec!["All".to_string()];
    titles.extend(app.categories.iter().cloned());
    let tabs = Tabs::new(titles)
        .select(app.category_idx)
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Categories | Sort: {} ", app.current_sort())),
        );
    f.render_widget(tabs, chunks[0]);

    // Search box
    let search_style = if app.searching {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    };
    let width = chunks[1].width.max(3) - 3;
    let scroll = app.search.visual_scroll(width as usize);
    let search = Paragraph::new(app.search.value())
        .style(search_style)
        .scroll((0, scroll as u16))
        .block(Block::default().borders(Borders::ALL).title(" Search "));
    f.render_widget(search, chunks[1]);

    if app.searching {
        f.set_cursor_position((
            chunks[1].x + ((app.search.visual_cursor().max(scroll) - scroll) as u16) + 1,
            chunks[1].y + 1,
        ));
    }

    // Product table
    if app.products.is_empty() {
        let empty = Paragraph::new("No products found. Try a different search or category.")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title(" Products "));
        f.render_widget(empty, chunks[2]);
        return;
    }

    let header = Row::new(vec!["Name", "Category", "Price", "Was", "Rating", "Stock"])
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app
        .products
        .iter()
        .map(|p| {
            Row::new(vec![
                Cell::from(p.name.clone()),
                Cell::from(p.category.clone()),
                Cell::from(format!("${:.2}", p.price)),
                Cell::from(Span::styled(
                    format!("${:.2}", p.original_price),
                    Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT),
                )),
                Cell::from(format!("{:.1} ({})", p.rating, p.reviews)),
                Cell::from(p.stock.to_string()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(34),
            Constraint::Percentage(14),
            Constraint::Percentage(12),
            Constraint::Percentage(12),
            Constraint::Percentage(16),
            Constraint::Percentage(12),
        ],
    )
    .header(header)
    .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .block(Block::default().borders(Borders::ALL).title(format!(
        " Products ({}) ",
        app.products.len()
    )));

    let mut state = TableState::default();
    state.select(Some(app.selected));
    f.render_stateful_widget(table, chunks[2], &mut state);
}

// ========== Product detail ==========

fn draw_detail(f: &mut Frame, app: &App, area: Rect) {
    let Some(product) = &app.detail else {
        return;
    };

    let discount_line = if product.discount > 0 {
        Line::from(vec![
            Span::styled(
                format!("${:.2}", product.price),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("${:.2}", product.original_price),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT),
            ),
            Span::styled(
                format!("  -{}%", product.discount),
                Style::default().fg(Color::Red),
            ),
        ])
    } else {
        Line::from(Span::styled(
            format!("${:.2}", product.price),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ))
    };

    let in_cart = app.cart.quantity_of(&product.id);
    let text = vec![
        Line::from(Span::styled(
            product.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            product.category.clone(),
            Style::default().fg(Color::Cyan),
        )),
        Line::raw(""),
        discount_line,
        Line::raw(""),
        Line::from(format!(
            "Rating: {:.1} ({} reviews) | {} sold",
            product.rating, product.reviews, product.sold
        )),
        Line::from(format!("In stock: {}", product.stock)),
        Line::raw(""),
        Line::from(product.description.clone()),
        Line::raw(""),
        Line::from(format!("Image: {}", product.image)),
        Line::raw(""),
        Line::from(vec![
            Span::raw("Quantity: "),
            Span::styled(
                format!("{}", app.detail_qty),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            if in_cart > 0 {
                Span::styled(
                    format!("   ({} already in cart)", in_cart),
                    Style::default().fg(Color::DarkGray),
                )
            } else {
                Span::raw("")
            },
        ]),
    ];

    let detail = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Product "));
    f.render_widget(detail, area);
}

// ========== Cart ==========

fn draw_cart(f: &mut Frame, app: &App, area: Rect) {
    if app.cart.is_empty() {
        let empty = Paragraph::new("Your cart is empty\n\nAdd some products to get started!")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(" Shopping Cart "));
        f.render_widget(empty, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(7)])
        .split(area);

    let header = Row::new(vec!["Item", "Price", "Qty", "Total"])
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app
        .cart
        .items()
        .iter()
        .map(|item| {
            Row::new(vec![
                Cell::from(item.product.name.clone()),
                Cell::from(format!("${:.2}", item.product.price)),
                Cell::from(item.quantity.to_string()),
                Cell::from(format!("${:.2}", item.line_total())),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(52),
            Constraint::Percentage(16),
            Constraint::Percentage(12),
            Constraint::Percentage(20),
        ],
    )
    .header(header)
    .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .block(Block::default().borders(Borders::ALL).title(format!(
        " Shopping Cart ({} items) ",
        app.cart.item_count()
    )));

    let mut state = TableState::default();
    state.select(Some(app.cart_selected));
    f.render_stateful_widget(table, chunks[0], &mut state);

    // Order summary
    let subtotal = app.cart.subtotal();
    let shipping = app.cart.shipping();
    let mut lines = vec![
        Line::from(format!("Subtotal ({} items): ${:.2}", app.cart.len(), subtotal)),
        Line::from(if shipping == 0.0 {
            Span::styled("Shipping: FREE", Style::default().fg(Color::Green))
        } else {
            Span::raw(format!("Shipping: ${:.2}", shipping))
        }),
    ];
    if subtotal < FREE_SHIPPING_THRESHOLD {
        lines.push(Line::from(Span::styled(
            format!(
                "Add ${:.2} more for FREE shipping!",
                FREE_SHIPPING_THRESHOLD - subtotal
            ),
            Style::default().fg(Color::Yellow),
        )));
    }
    lines.push(Line::from(Span::styled(
        format!("Total: ${:.2}", app.cart.total()),
        Style::default().add_modifier(Modifier::BOLD),
    )));

    let summary = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Order Summary "));
    f.render_widget(summary, chunks[1]);
}

// ========== Checkout ==========

fn draw_checkout(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    draw_form(
        f,
        &app.checkout,
        chunks[0],
        " Contact & Shipping (all fields required) ",
    );

    // Order summary with tax
    let mut lines: Vec<Line> = app
        .cart
        .items()
        .iter()
        .map(|item| {
            Line::from(format!(
                "{} x{}  ${:.2}",
                item.product.name,
                item.quantity,
                item.line_total()
            ))
        })
        .collect();
    lines.push(Line::raw(""));
    lines.push(Line::from(format!("Subtotal: ${:.2}", app.cart.subtotal())));
    lines.push(Line::from(if app.cart.shipping() == 0.0 {
        "Shipping: FREE".to_string()
    } else {
        format!("Shipping: ${:.2}", app.cart.shipping())
    }));
    lines.push(Line::from(format!("Tax: ${:.2}", app.cart.tax())));
    lines.push(Line::from(Span::styled(
        format!("Place Order - ${:.2}", app.cart.checkout_total()),
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    )));

    let summary = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Order Summary "));
    f.render_widget(summary, chunks[1]);
}

// ========== Order placed ==========

fn draw_order_placed(f: &mut Frame, app: &App, area: Rect) {
    let order_id = app.placed_order_id.as_deref().unwrap_or("-");
    let text = vec![
        Line::raw(""),
        Line::from(Span::styled(
            "✓ Order Placed Successfully!",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(format!("Order #{}", order_id)),
        Line::raw(""),
        Line::from("Thank you for your purchase. Your order has been confirmed."),
        Line::from("You will receive an email confirmation shortly."),
    ];

    let success = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(success, area);
}

// ========== Admin ==========

fn draw_admin(f: &mut Frame, app: &App, area: Rect) {
    if app.admin_products.is_empty() {
        let empty = Paragraph::new("No products. Press 'n' to add one.")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title(" Admin Dashboard "));
        f.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec!["ID", "Name", "Category", "Price", "Stock", "Sold"])
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app
        .admin_products
        .iter()
        .map(|p| {
            Row::new(vec![
                Cell::from(p.id.clone()),
                Cell::from(p.name.clone()),
                Cell::from(p.category.clone()),
                Cell::from(format!("${:.2}", p.price)),
                Cell::from(p.stock.to_string()),
                Cell::from(p.sold.to_string()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(5),
            Constraint::Percentage(40),
            Constraint::Percentage(18),
            Constraint::Percentage(14),
            Constraint::Percentage(12),
            Constraint::Percentage(12),
        ],
    )
    .header(header)
    .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .block(Block::default().borders(Borders::ALL).title(format!(
        " Admin Dashboard ({} products) ",
        app.admin_products.len()
    )));

    let mut state = TableState::default();
    state.select(Some(app.admin_selected));
    f.render_stateful_widget(table, area, &mut state);
}

fn draw_admin_form(f: &mut Frame, app: &App) {
    let Some(form) = &app.admin_form else {
        return;
    };
    let title = if app.admin_editing.is_some() {
        " Edit Product "
    } else {
        " Add New Product "
    };

    let area = centered_rect(60, (form.fields.len() + 2) as u16, f.area());
    f.render_widget(Clear, area);
    draw_form(f, form, area, title);
}

fn draw_confirm_delete(f: &mut Frame, app: &App) {
    let Some(id) = &app.confirm_delete else {
        return;
    };
    let name = app
        .admin_products
        .iter()
        .find(|p| &p.id == id)
        .map(|p| p.name.as_str())
        .unwrap_or("this product");

    let area = centered_rect(50, 5, f.area());
    f.render_widget(Clear, area);
    let confirm = Paragraph::new(vec![
        Line::from(format!("Delete \"{}\"?", name)),
        Line::raw(""),
        Line::from("y = delete, any other key = cancel"),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(" Confirm Delete "),
    );
    f.render_widget(confirm, area);
}

// ========== Shared helpers ==========

/// Render a labelled form; the focused field gets the cursor
fn draw_form(f: &mut Frame, form: &Form, area: Rect, title: &str) {
    let lines: Vec<Line> = form
        .fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let style = if index == form.focus {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(
                    format!("{:<width$}", field.label, width = LABEL_WIDTH),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(field.input.value().to_string(), style),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()));
    f.render_widget(paragraph, area);

    let row = form.focus as u16;
    if row < area.height.saturating_sub(2) {
        let input = &form.fields[form.focus].input;
        f.set_cursor_position((
            area.x + 1 + LABEL_WIDTH as u16 + input.visual_cursor() as u16,
            area.y + 1 + row,
        ));
    }
}

/// Centered popup rect with a fixed height and percentage width
fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let v = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(height),
            Constraint::Min(1),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(v[1])[1]
}

fn draw_alert(f: &mut Frame, message: &str) {
    let area = centered_rect(60, 6, f.area());
    f.render_widget(Clear, area);
    let alert = Paragraph::new(vec![
        Line::raw(""),
        Line::from(message.to_string()),
        Line::raw(""),
        Line::from(Span::styled(
            "Press any key to continue",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(" Error "),
    );
    f.render_widget(alert, area);
}
