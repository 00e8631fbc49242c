//! Initial catalog contents loaded at startup.

use crate::product::Product;

/// The fixed seed set, in insertion order.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product::from_parts(
            "1",
            "Neon Gaming Headset",
            "neon-gaming-headset",
            199.99,
            "Immersive sound with active noise cancellation and RGB lighting.",
            "Electronics",
        ),
        Product::from_parts(
            "2",
            "Mechanical Keyboard",
            "mechanical-keyboard",
            129.50,
            "Linear switches for swift gaming action and satisfying clicks.",
            "Electronics",
        ),
        Product::from_parts(
            "3",
            "Developer Hoodie",
            "developer-hoodie",
            49.99,
            "Comfortable cotton blend hoodie perfect for long coding sessions.",
            "Clothing",
        ),
        Product::from_parts(
            "4",
            "USB-C Docking Station",
            "usb-c-dock",
            89.00,
            "Expand your connectivity with HDMI, Ethernet, and 4 USB ports.",
            "Accessories",
        ),
    ]
}
