use std::path::Path;

use crate::error::Result;
use crate::models::ShoppingListEntry;

/// Write a shopping list to a CSV file.
pub fn export_shopping_csv<P: AsRef<Path>>(path: P, entries: &[ShoppingListEntry]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["item", "category", "portions", "amount", "unit"])?;

    for entry in entries {
        wtr.write_record([
            entry.name.to_string(),
            entry.category.label().to_string(),
            format!("{:.2}", entry.quantity),
            entry.total_amount.to_string(),
            entry.unit.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FoodCategory;
    use tempfile::NamedTempFile;

    #[test]
    fn test_export_writes_header_and_rows() {
        let entries = vec![
            ShoppingListEntry {
                food_id: 1,
                name: "Grilled chicken breast",
                category: FoodCategory::Protein,
                quantity: 3.5,
                total_amount: 420,
                unit: "g",
            },
            ShoppingListEntry {
                food_id: 64,
                name: "Orange juice",
                category: FoodCategory::Beverage,
                quantity: 2.0,
                total_amount: 500,
                unit: "ml",
            },
        ];

        let file = NamedTempFile::new().unwrap();
        export_shopping_csv(file.path(), &entries).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next().unwrap(), "item,category,portions,amount,unit");
        assert_eq!(
            lines.next().unwrap(),
            "Grilled chicken breast,proteins,3.50,420,g"
        );
        assert_eq!(lines.next().unwrap(), "Orange juice,beverages,2.00,500,ml");
    }

    #[test]
    fn test_export_empty_list() {
        let file = NamedTempFile::new().unwrap();
        export_shopping_csv(file.path(), &[]).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(content.lines().count(), 1);
    }
}
