// src/io/sample.rs

use crate::model::sku::Sku;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const PRODUCT_NAMES: [&str; 12] = [
    "Wireless Mouse Pro",
    "Mechanical Keyboard RGB",
    "USB-C Hub 7-Port",
    "Laptop Stand Aluminum",
    "Webcam HD 1080p",
    "Monitor Arm Dual",
    "Desk Mat XL",
    "Cable Management Kit",
    "Portable SSD 1TB",
    "Bluetooth Headset",
    "Ergonomic Chair Cushion",
    "LED Desk Lamp",
];

/// Generates a demo portfolio with a mix of risk profiles.
///
/// Roughly 20% of SKUs start short on stock, 20% heavily overstocked and the
/// rest near a normal lead-time cover. The same seed yields the same SKUs.
pub fn generate_sample_skus(count: usize, seed: u64) -> Vec<Sku> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count).map(|i| sample_sku(i, &mut rng)).collect()
}

fn sample_sku<R: Rng>(index: usize, rng: &mut R) -> Sku {
    let base_price: f64 = rng.gen_range(20.0..200.0);
    let daily_sales: f64 = rng.gen_range(5.0..50.0);
    let lead_time: u32 = rng.gen_range(3..15);

    let profile: f64 = rng.gen();
    let cover_multiplier = if profile < 0.2 {
        // Low stock
        rng.gen_range(0.3..0.6)
    } else if profile > 0.8 {
        // Overstock
        rng.gen_range(3.0..5.0)
    } else {
        rng.gen_range(1.0..1.5)
    };

    Sku {
        id: format!("SKU-{:04}", index + 1),
        name: PRODUCT_NAMES[index % PRODUCT_NAMES.len()].to_string(),
        current_inventory: (daily_sales * lead_time as f64 * cover_multiplier).round(),
        daily_sales_rate: (daily_sales * 10.0).round() / 10.0,
        sales_variability: 15.0 + rng.gen_range(0..=25) as f64,
        lead_time_days: lead_time as f64,
        lead_time_variability: 1.0 + rng.gen_range(0..=3) as f64,
        reorder_point: (daily_sales * lead_time as f64 * 0.8).round(),
        reorder_quantity: (daily_sales * 14.0).round(),
        unit_cost: (base_price * 100.0).round() / 100.0,
        holding_cost_percent: 15.0 + rng.gen_range(0..=10) as f64,
    }
}
