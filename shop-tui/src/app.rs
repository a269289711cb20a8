//! Application state and key handling
//!
//! 状态转换分两类：购物车的纯转换 (委托给 shop-client 的 Cart)
//! 和网络请求。网络调用在按键处理中就地 await，不做去重或取消；
//! 失败以阻塞提示呈现，用户确认后继续。

use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyEvent};
use serde_json::Value;
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

use shared::models::{CustomerInfo, OrderCreate, Product};
use shop_client::{Cart, CartStorage, ClientConfig, ClientError, ProductFilter, ShopClient};

use crate::forms::Form;

/// Sort options cycled with `s`, in the order the storefront offers them
pub const SORTS: [(&str, Option<&str>); 4] = [
    ("Featured", None),
    ("Price: Low to High", Some("price-low")),
    ("Price: High to Low", Some("price-high")),
    ("Top Rated", Some("rating")),
];

const CHECKOUT_LABELS: [&str; 9] = [
    "First Name",
    "Last Name",
    "Email",
    "Phone",
    "Street Address",
    "City",
    "State/Province",
    "ZIP/Postal Code",
    "Country",
];

const ADMIN_LABELS: [&str; 11] = [
    "Name",
    "Price",
    "Original Price",
    "Discount %",
    "Category",
    "Description",
    "Image URL",
    "Stock",
    "Rating",
    "Reviews",
    "Sold",
];

/// Wire keys for the admin form, index-aligned with [`ADMIN_LABELS`]
const ADMIN_KEYS: [&str; 11] = [
    "name",
    "price",
    "originalPrice",
    "discount",
    "category",
    "description",
    "image",
    "stock",
    "rating",
    "reviews",
    "sold",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Catalog,
    Detail,
    Cart,
    Checkout,
    OrderPlaced,
    Admin,
}

/// Transient status message, auto-expires
///
/// 与购物车状态转换解耦的界面反馈 ("✓ Added to cart" 之类)。
pub struct Notice {
    pub text: String,
    expires_at: Instant,
}

pub struct App {
    pub client: ShopClient,
    pub storage: CartStorage,
    pub cart: Cart,
    pub screen: Screen,
    pub should_quit: bool,

    // Catalog
    pub products: Vec<Product>,
    pub categories: Vec<String>,
    /// 0 = All, 1.. = categories[idx - 1]
    pub category_idx: usize,
    pub sort_idx: usize,
    pub search: Input,
    pub searching: bool,
    pub selected: usize,

    // Product detail
    pub detail: Option<Product>,
    pub detail_qty: u32,

    // Cart screen
    pub cart_selected: usize,

    // Checkout
    pub checkout: Form,
    pub placed_order_id: Option<String>,

    // Admin
    pub admin_products: Vec<Product>,
    pub admin_selected: usize,
    pub admin_form: Option<Form>,
    /// Product id when the form edits an existing product
    pub admin_editing: Option<String>,
    pub confirm_delete: Option<String>,

    // Feedback
    pub notice: Option<Notice>,
    /// Blocking alert; input is swallowed until dismissed
    pub alert: Option<String>,
}

impl App {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = ShopClient::from_config(config)?;
        let storage = CartStorage::new(config.cart_path());
        let cart = storage.load();

        Ok(Self {
            client,
            storage,
            cart,
            screen: Screen::Catalog,
            should_quit: false,
            products: Vec::new(),
            categories: Vec::new(),
            category_idx: 0,
            sort_idx: 0,
            search: Input::default(),
            searching: false,
            selected: 0,
            detail: None,
            detail_qty: 1,
            cart_selected: 0,
            checkout: Form::new(&CHECKOUT_LABELS),
            placed_order_id: None,
            admin_products: Vec::new(),
            admin_selected: 0,
            admin_form: None,
            admin_editing: None,
            confirm_delete: None,
            notice: None,
            alert: None,
        })
    }

    /// Expire the transient notice
    pub fn tick(&mut self) {
        if let Some(notice) = &self.notice
            && notice.expires_at <= Instant::now()
        {
            self.notice = None;
        }
    }

    fn notify(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            text: text.into(),
            expires_at: Instant::now() + Duration::from_secs(2),
        });
    }

    pub fn current_sort(&self) -> &'static str {
        SORTS[self.sort_idx].0
    }

    pub fn current_category(&self) -> &str {
        if self.category_idx == 0 {
            "All"
        } else {
            &self.categories[self.category_idx - 1]
        }
    }

    fn current_filter(&self) -> ProductFilter {
        ProductFilter {
            category: (self.category_idx > 0).then(|| self.current_category().to_string()),
            search: {
                let s = self.search.value().trim();
                (!s.is_empty()).then(|| s.to_string())
            },
            sort: SORTS[self.sort_idx].1.map(str::to_string),
        }
    }

    fn persist_cart(&self) {
        // 与原版 local storage 一样静默保存
        let _ = self.storage.save(&self.cart);
    }

    // ========== Network actions ==========

    /// Fetch categories and the (filtered) product listing
    pub async fn refresh_catalog(&mut self) {
        match self.client.categories().await {
            Ok(categories) => {
                self.categories = categories;
                self.category_idx = self.category_idx.min(self.categories.len());
            }
            Err(e) => self.alert = Some(format!("Error fetching categories: {e}")),
        }
        self.refresh_products().await;
    }

    async fn refresh_products(&mut self) {
        match self.client.products(&self.current_filter()).await {
            Ok(products) => {
                self.products = products;
                self.selected = self.selected.min(self.products.len().saturating_sub(1));
            }
            Err(e) => self.alert = Some(format!("Error fetching products: {e}")),
        }
    }

    async fn refresh_admin(&mut self) {
        match self.client.products(&ProductFilter::default()).await {
            Ok(products) => {
                self.admin_products = products;
                self.admin_selected = self
                    .admin_selected
                    .min(self.admin_products.len().saturating_sub(1));
            }
            Err(e) => self.alert = Some(format!("Error fetching products: {e}")),
        }
    }

    fn add_to_cart(&mut self, product: Product, quantity: u32) {
        self.cart.add(product, quantity);
        self.persist_cart();
        self.notify("✓ Added to cart");
    }

    async fn submit_order(&mut self) {
        if !self.checkout.is_complete() {
            self.alert = Some("Please fill in all required fields".to_string());
            return;
        }

        let payload = OrderCreate {
            items: self.cart.items().to_vec(),
            total: self.cart.checkout_total(),
            customer_info: self.customer_info(),
        };

        match self.client.create_order(&payload).await {
            Ok(order) => {
                self.placed_order_id = Some(order.id);
                self.cart.clear();
                self.persist_cart();
                self.checkout = Form::new(&CHECKOUT_LABELS);
                self.screen = Screen::OrderPlaced;
            }
            Err(e) => {
                self.alert = Some(format!("Failed to place order. Please try again. ({e})"));
            }
        }
    }

    fn customer_info(&self) -> CustomerInfo {
        let value = |i: usize| self.checkout.value(i).trim().to_string();
        CustomerInfo {
            first_name: value(0),
            last_name: value(1),
            email: value(2),
            phone: value(3),
            address: value(4),
            city: value(5),
            state: value(6),
            zip_code: value(7),
            country: value(8),
        }
    }

    /// Admin form payload: every field submitted as a string, numeric
    /// parsing happens server-side
    fn admin_payload(form: &Form) -> Value {
        let mut map = serde_json::Map::new();
        for (index, key) in ADMIN_KEYS.iter().enumerate() {
            map.insert(
                (*key).to_string(),
                Value::String(form.value(index).trim().to_string()),
            );
        }
        Value::Object(map)
    }

    fn edit_form(product: &Product) -> Form {
        let values = [
            product.name.clone(),
            product.price.to_string(),
            product.original_price.to_string(),
            product.discount.to_string(),
            product.category.clone(),
            product.description.clone(),
            product.image.clone(),
            product.stock.to_string(),
            product.rating.to_string(),
            product.reviews.to_string(),
            product.sold.to_string(),
        ];
        Form::with_values(
            &ADMIN_LABELS
                .iter()
                .zip(values)
                .map(|(label, value)| (*label, value))
                .collect::<Vec<_>>(),
        )
    }

    async fn submit_admin_form(&mut self) {
        let Some(form) = &self.admin_form else {
            return;
        };
        let missing_required = form.value(0).trim().is_empty() || form.value(1).trim().is_empty();
        let payload = Self::admin_payload(form);

        if missing_required {
            self.alert = Some("Name and price are required".to_string());
            return;
        }

        let result = match self.admin_editing.clone() {
            Some(id) => self.client.update_product(&id, &payload).await,
            None => self.client.create_product(&payload).await,
        };

        match result {
            Ok(_) => {
                self.admin_form = None;
                self.admin_editing = None;
                self.notify("Product saved");
                self.refresh_admin().await;
                self.refresh_products().await;
            }
            Err(e) => self.alert = Some(format!("Failed to save product ({e})")),
        }
    }

    async fn delete_product(&mut self, id: String) {
        match self.client.delete_product(&id).await {
            Ok(()) => {
                self.notify("Product deleted");
                self.refresh_admin().await;
                self.refresh_products().await;
            }
            Err(e) => self.alert = Some(format!("Failed to delete product ({e})")),
        }
    }

    // ========== Key handling ==========

    pub async fn handle_key(&mut self, key: KeyEvent) {
        // 阻塞提示：任意键关闭，其余输入吞掉
        if self.alert.is_some() {
            self.alert = None;
            return;
        }

        match self.screen {
            Screen::Catalog => self.handle_catalog_key(key).await,
            Screen::Detail => self.handle_detail_key(key),
            Screen::Cart => self.handle_cart_key(key),
            Screen::Checkout => self.handle_checkout_key(key).await,
            Screen::OrderPlaced => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                    self.placed_order_id = None;
                    self.screen = Screen::Catalog;
                }
            }
            Screen::Admin => self.handle_admin_key(key).await,
        }
    }

    async fn handle_catalog_key(&mut self, key: KeyEvent) {
        if self.searching {
            match key.code {
                KeyCode::Enter => {
                    self.searching = false;
                    self.refresh_products().await;
                }
                KeyCode::Esc => {
                    self.searching = false;
                    self.search.reset();
                    self.refresh_products().await;
                }
                _ => {
                    self.search.handle_event(&Event::Key(key));
                }
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('/') => self.searching = true,
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => {
                if self.selected + 1 < self.products.len() {
                    self.selected += 1;
                }
            }
            // 分类标签循环: All -> categories -> All
            KeyCode::Tab | KeyCode::Right => {
                self.category_idx = (self.category_idx + 1) % (self.categories.len() + 1);
                self.refresh_products().await;
            }
            KeyCode::BackTab | KeyCode::Left => {
                let count = self.categories.len() + 1;
                self.category_idx = (self.category_idx + count - 1) % count;
                self.refresh_products().await;
            }
            KeyCode::Char('s') => {
                self.sort_idx = (self.sort_idx + 1) % SORTS.len();
                self.refresh_products().await;
            }
            KeyCode::Char('r') => self.refresh_catalog().await,
            KeyCode::Enter => {
                if let Some(product) = self.products.get(self.selected).cloned() {
                    self.detail = Some(product);
                    self.detail_qty = 1;
                    self.screen = Screen::Detail;
                }
            }
            KeyCode::Char('a') => {
                if let Some(product) = self.products.get(self.selected).cloned() {
                    self.add_to_cart(product, 1);
                }
            }
            KeyCode::Char('c') => {
                self.cart_selected = 0;
                self.screen = Screen::Cart;
            }
            KeyCode::Char('m') => {
                self.screen = Screen::Admin;
                self.refresh_admin().await;
            }
            _ => {}
        }
    }

    fn handle_detail_key(&mut self, key: KeyEvent) {
        let Some(product) = self.detail.clone() else {
            self.screen = Screen::Catalog;
            return;
        };

        match key.code {
            KeyCode::Esc => {
                self.detail = None;
                self.screen = Screen::Catalog;
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                if self.detail_qty < product.stock.max(1) {
                    self.detail_qty += 1;
                }
            }
            KeyCode::Char('-') => {
                if self.detail_qty > 1 {
                    self.detail_qty -= 1;
                }
            }
            KeyCode::Char('a') | KeyCode::Enter => {
                self.add_to_cart(product, self.detail_qty);
                self.detail_qty = 1;
            }
            KeyCode::Char('c') => {
                self.cart_selected = 0;
                self.screen = Screen::Cart;
            }
            _ => {}
        }
    }

    fn handle_cart_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.screen = Screen::Catalog,
            KeyCode::Up => self.cart_selected = self.cart_selected.saturating_sub(1),
            KeyCode::Down => {
                if self.cart_selected + 1 < self.cart.len() {
                    self.cart_selected += 1;
                }
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                if let Some(item) = self.cart.items().get(self.cart_selected) {
                    // 原版在数量达到库存时禁用 + 按钮
                    if item.quantity < item.product.stock {
                        let id = item.product.id.clone();
                        let quantity = item.quantity + 1;
                        self.cart.set_quantity(&id, quantity);
                        self.persist_cart();
                    }
                }
            }
            KeyCode::Char('-') => {
                if let Some(item) = self.cart.items().get(self.cart_selected) {
                    let id = item.product.id.clone();
                    let quantity = item.quantity.saturating_sub(1);
                    self.cart.set_quantity(&id, quantity);
                    self.persist_cart();
                    self.cart_selected = self.cart_selected.min(self.cart.len().saturating_sub(1));
                }
            }
            KeyCode::Char('x') | KeyCode::Delete => {
                if let Some(item) = self.cart.items().get(self.cart_selected) {
                    let id = item.product.id.clone();
                    self.cart.remove(&id);
                    self.persist_cart();
                    self.cart_selected = self.cart_selected.min(self.cart.len().saturating_sub(1));
                }
            }
            KeyCode::Enter => {
                if !self.cart.is_empty() {
                    self.screen = Screen::Checkout;
                }
            }
            _ => {}
        }
    }

    async fn handle_checkout_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.screen = Screen::Cart,
            KeyCode::Tab | KeyCode::Down => self.checkout.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.checkout.prev_field(),
            KeyCode::Enter => self.submit_order().await,
            _ => {
                self.checkout.focused_input_mut().handle_event(&Event::Key(key));
            }
        }
    }

    async fn handle_admin_key(&mut self, key: KeyEvent) {
        // 删除确认优先
        if let Some(id) = self.confirm_delete.clone() {
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => {
                    self.confirm_delete = None;
                    self.delete_product(id).await;
                }
                _ => self.confirm_delete = None,
            }
            return;
        }

        if self.admin_form.is_some() {
            match key.code {
                KeyCode::Esc => {
                    self.admin_form = None;
                    self.admin_editing = None;
                }
                KeyCode::Tab | KeyCode::Down => {
                    if let Some(form) = &mut self.admin_form {
                        form.next_field();
                    }
                }
                KeyCode::BackTab | KeyCode::Up => {
                    if let Some(form) = &mut self.admin_form {
                        form.prev_field();
                    }
                }
                KeyCode::Enter => self.submit_admin_form().await,
                _ => {
                    if let Some(form) = &mut self.admin_form {
                        form.focused_input_mut().handle_event(&Event::Key(key));
                    }
                }
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.screen = Screen::Catalog,
            KeyCode::Up => self.admin_selected = self.admin_selected.saturating_sub(1),
            KeyCode::Down => {
                if self.admin_selected + 1 < self.admin_products.len() {
                    self.admin_selected += 1;
                }
            }
            KeyCode::Char('n') => {
                self.admin_editing = None;
                self.admin_form = Some(Form::new(&ADMIN_LABELS));
            }
            KeyCode::Char('e') => {
                if let Some(product) = self.admin_products.get(self.admin_selected) {
                    self.admin_editing = Some(product.id.clone());
                    self.admin_form = Some(Self::edit_form(product));
                }
            }
            KeyCode::Char('d') => {
                if let Some(product) = self.admin_products.get(self.admin_selected) {
                    self.confirm_delete = Some(product.id.clone());
                }
            }
            KeyCode::Char('r') => self.refresh_admin().await,
            _ => {}
        }
    }
}
