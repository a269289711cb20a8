//! Seed Catalog
//!
//! 启动时填充的演示商品。无持久化，进程重启后回到这份数据。

use shared::models::Product;

/// Id assigned to the first product created after the seed
pub const NEXT_PRODUCT_ID: u64 = 9;

fn product(
    id: &str,
    name: &str,
    price: f64,
    original_price: f64,
    discount: u32,
    rating: f64,
    reviews: u32,
    image: &str,
    category: &str,
    description: &str,
    stock: u32,
    sold: u32,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        price,
        original_price,
        discount,
        rating,
        reviews,
        image: image.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        stock,
        sold,
    }
}

/// The demo catalog: six Electronics products, one wearable, one accessory
pub fn seed_products() -> Vec<Product> {
    vec![
        product(
            "1",
            "Wireless Bluetooth Headphones",
            49.99,
            79.99,
            38,
            4.5,
            1234,
            "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=500",
            "Electronics",
            "High-quality wireless headphones with noise cancellation and 30-hour battery life.",
            50,
            2500,
        ),
        product(
            "2",
            "Smart Watch Pro",
            199.99,
            299.99,
            33,
            4.7,
            856,
            "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=500",
            "Wearables",
            "Advanced smartwatch with health tracking, GPS, and water resistance.",
            30,
            1800,
        ),
        product(
            "3",
            "Portable Power Bank 20000mAh",
            29.99,
            49.99,
            40,
            4.6,
            2341,
            "https://images.unsplash.com/photo-1609091839311-d5365f9ff1c5?w=500",
            "Electronics",
            "High-capacity power bank with fast charging for all your devices.",
            100,
            5600,
        ),
        product(
            "4",
            "Mechanical Gaming Keyboard",
            89.99,
            129.99,
            31,
            4.8,
            678,
            "https://images.unsplash.com/photo-1587829741301-dc798b83add3?w=500",
            "Electronics",
            "RGB mechanical keyboard with customizable keys and macro support.",
            45,
            890,
        ),
        product(
            "5",
            "Wireless Mouse",
            24.99,
            39.99,
            38,
            4.4,
            1567,
            "https://images.unsplash.com/photo-1527864550417-7fd91fc51a46?w=500",
            "Electronics",
            "Ergonomic wireless mouse with precision tracking and long battery life.",
            80,
            3200,
        ),
        product(
            "6",
            "USB-C Hub Adapter",
            34.99,
            54.99,
            36,
            4.5,
            923,
            "https://images.unsplash.com/photo-1625948515291-69613efd103f?w=500",
            "Electronics",
            "7-in-1 USB-C hub with HDMI, USB 3.0, SD card reader, and more.",
            60,
            1450,
        ),
        product(
            "7",
            "Laptop Stand Aluminum",
            39.99,
            59.99,
            33,
            4.7,
            445,
            "https://images.unsplash.com/photo-1527864550417-7fd91fc51a46?w=500",
            "Accessories",
            "Adjustable aluminum laptop stand for better ergonomics and cooling.",
            70,
            980,
        ),
        product(
            "8",
            "Webcam 1080p HD",
            59.99,
            89.99,
            33,
            4.6,
            1123,
            "https://images.unsplash.com/photo-1587826080692-f439cd0b70da?w=500",
            "Electronics",
            "Full HD webcam with auto-focus and built-in microphone.",
            40,
            2100,
        ),
    ]
}
