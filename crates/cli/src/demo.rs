use sweetshop_inventory::{Inventory, InventoryResult, Sweet};

const DEMO: [(u32, &str, &str, f64, i64); 5] = [
    (1, "Chocolate Bar", "Chocolate", 2.99, 50),
    (2, "Gummy Bears", "Gummies", 1.49, 100),
    (3, "Salted Caramel", "Toffee", 0.75, 200),
    (4, "Dark Truffle", "Chocolate", 3.50, 24),
    (5, "Sour Worms", "Gummies", 1.25, 0),
];

/// Load a small fixed catalog into `inventory`.
pub fn seed(inventory: &mut Inventory) -> InventoryResult<()> {
    for (id, name, category, price, quantity) in DEMO {
        inventory.add(Sweet::new(id, name, category, price, quantity)?)?;
    }
    Ok(())
}
