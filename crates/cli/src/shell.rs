//! Menu loop: reads a choice, runs one action, repeats until exit.

use std::io::{BufRead, Write};

use tracing::{info, warn};

use sweetshop_inventory::{
    Inventory, InventoryError, SearchQuery, SortKey, SortOrder, Sweet, SweetId,
};

use crate::prompt::{PromptError, PromptResult, Prompter};
use crate::render;

const MENU: &[&str] = &[
    "1. Add Sweet",
    "2. Delete Sweet",
    "3. View All Sweets",
    "4. Search Sweets",
    "5. Sort Sweets",
    "6. Purchase Sweet",
    "7. Restock Sweet",
    "0. Exit",
];

/// Interactive session over one inventory.
#[derive(Debug)]
pub struct Shell<R, W> {
    inventory: Inventory,
    prompt: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self::with_inventory(Inventory::new(), input, output)
    }

    pub fn with_inventory(inventory: Inventory, input: R, output: W) -> Self {
        Self {
            inventory,
            prompt: Prompter::new(input, output),
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn into_parts(self) -> (Inventory, W) {
        let (_, output) = self.prompt.into_parts();
        (self.inventory, output)
    }

    /// Run until the user exits or input ends. Only I/O failures on the
    /// output stream end the session with an error.
    pub fn run(&mut self) -> std::io::Result<()> {
        info!(sweets = self.inventory.len(), "shell started");
        loop {
            match self.step() {
                Ok(true) => continue,
                Ok(false) | Err(PromptError::Eof) => break,
                Err(PromptError::Io(e)) => return Err(e),
            }
        }
        writeln!(
            self.prompt.output(),
            "\nExiting Sweet Shop Management System. Goodbye!"
        )?;
        info!("shell finished");
        Ok(())
    }

    /// One menu round. Returns `false` when the user chose to exit.
    fn step(&mut self) -> PromptResult<bool> {
        self.menu()?;
        let choice = self
            .prompt
            .integer("\nEnter your choice (0-7): ", Some(0), Some(7))?;

        let outcome = match choice {
            0 => return Ok(false),
            1 => self.add(),
            2 => self.delete(),
            3 => self.view_all(),
            4 => self.search(),
            5 => self.sort(),
            6 => self.purchase(),
            // 7; the prompt bounds the choice to 0..=7.
            _ => self.restock(),
        };

        match outcome {
            Ok(Ok(())) => {}
            Ok(Err(e)) => self.report(&e)?,
            Err(e) => return Err(e),
        }
        Ok(true)
    }

    fn menu(&mut self) -> PromptResult<()> {
        let out = self.prompt.output();
        render::rule(out)?;
        writeln!(out, "\nSweet Shop Management System")?;
        render::rule(out)?;
        for line in MENU {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }

    fn report(&mut self, err: &InventoryError) -> PromptResult<()> {
        warn!(code = err.code(), error = %err, "action rejected");
        writeln!(self.prompt.output(), "Error: {err}")?;
        Ok(())
    }

    /// Prints a notice and returns `true` when there is nothing to act on.
    fn empty_notice(&mut self) -> PromptResult<bool> {
        if self.inventory.is_empty() {
            writeln!(self.prompt.output(), "Inventory is empty.")?;
            return Ok(true);
        }
        Ok(false)
    }

    fn read_id(&mut self, prompt: &str) -> PromptResult<SweetId> {
        let raw = self.prompt.integer(prompt, Some(1), Some(i64::from(u32::MAX)))?;
        Ok(SweetId::new(raw as u32))
    }

    fn read_units(&mut self, prompt: &str) -> PromptResult<u32> {
        let raw = self.prompt.integer(prompt, Some(1), Some(i64::from(u32::MAX)))?;
        Ok(raw as u32)
    }

    fn add(&mut self) -> PromptResult<Result<(), InventoryError>> {
        writeln!(self.prompt.output(), "\nAdd New Sweet")?;
        let id = self.read_id("Enter sweet ID: ")?;
        let name = self.prompt.text("Enter sweet name: ", 1)?;
        let category = self.prompt.text("Enter category: ", 1)?;
        let price = self.prompt.float("Enter price: ", Some(0.01))?;
        let quantity = self
            .prompt
            .integer("Enter initial quantity: ", Some(0), None)?;

        let added = Sweet::new(id, name.as_str(), category, price, quantity)
            .and_then(|sweet| self.inventory.add(sweet));
        if added.is_ok() {
            writeln!(self.prompt.output(), "Successfully added {name} to inventory!")?;
        }
        Ok(added)
    }

    fn delete(&mut self) -> PromptResult<Result<(), InventoryError>> {
        writeln!(self.prompt.output(), "\nDelete Sweet")?;
        if self.empty_notice()? {
            return Ok(Ok(()));
        }
        let id = self.read_id("Enter sweet ID to delete: ")?;

        let deleted = self.inventory.delete(id).map(|_| ());
        if deleted.is_ok() {
            writeln!(self.prompt.output(), "Sweet deleted successfully!")?;
        }
        Ok(deleted)
    }

    fn view_all(&mut self) -> PromptResult<Result<(), InventoryError>> {
        writeln!(self.prompt.output(), "\nAll Sweets in Inventory\n")?;
        if self.empty_notice()? {
            return Ok(Ok(()));
        }
        let sweets = self.inventory.list();
        render::table(self.prompt.output(), &sweets)?;
        Ok(Ok(()))
    }

    fn search(&mut self) -> PromptResult<Result<(), InventoryError>> {
        let out = self.prompt.output();
        writeln!(out, "\nSearch Sweets")?;
        writeln!(out, "Leave any field blank to skip that filter")?;

        let mut query = SearchQuery::new();
        let name = self.prompt.line("Enter name (or partial name) to search: ")?;
        if !name.is_empty() {
            query = query.name(name);
        }
        let category = self.prompt.line("Enter category to search: ")?;
        if !category.is_empty() {
            query = query.category(category);
        }

        match self.price_bounds()? {
            Some((min, max)) => {
                query.min_price = min;
                query.max_price = max;
            }
            None => writeln!(
                self.prompt.output(),
                "Invalid price input. Using no price filters."
            )?,
        }

        let results = match self.inventory.search(&query) {
            Ok(results) => results,
            Err(e) => return Ok(Err(e)),
        };

        let out = self.prompt.output();
        writeln!(out, "\nFound {} matching sweet(s):\n", results.len())?;
        if results.is_empty() {
            writeln!(out, "No sweets match your search criteria.")?;
        } else {
            render::table(out, &results)?;
        }
        Ok(Ok(()))
    }

    /// Reads the minimum then the maximum price. An unparseable minimum ends
    /// the questions early; `None` means neither bound applies.
    fn price_bounds(&mut self) -> PromptResult<Option<(Option<f64>, Option<f64>)>> {
        let min = self.prompt.line("Enter minimum price (leave blank for none): ")?;
        let Ok(min) = parse_bound(&min) else {
            return Ok(None);
        };
        let max = self.prompt.line("Enter maximum price (leave blank for none): ")?;
        let Ok(max) = parse_bound(&max) else {
            return Ok(None);
        };
        Ok(Some((min, max)))
    }

    fn sort(&mut self) -> PromptResult<Result<(), InventoryError>> {
        writeln!(self.prompt.output(), "\nSort Sweets")?;
        if self.empty_notice()? {
            return Ok(Ok(()));
        }

        let out = self.prompt.output();
        writeln!(out, "Sort by:")?;
        for (idx, key) in SortKey::ALL.iter().enumerate() {
            writeln!(out, "{}. {}", idx + 1, capitalize(key.as_str()))?;
        }
        let choice = self.prompt.integer("Enter your choice (1-3): ", Some(1), Some(3))?;
        let key = SortKey::ALL[(choice - 1) as usize];

        let order = self
            .prompt
            .line("Sort order (A)scending or (D)escending? [A/D]: ")?;
        let order = SortOrder::from_reverse(order.eq_ignore_ascii_case("d"));

        let sorted = self.inventory.sort(key, order);
        writeln!(self.prompt.output(), "\nSorted Results:\n")?;
        render::table(self.prompt.output(), &sorted)?;
        Ok(Ok(()))
    }

    fn purchase(&mut self) -> PromptResult<Result<(), InventoryError>> {
        writeln!(self.prompt.output(), "\nPurchase Sweet")?;
        if self.empty_notice()? {
            return Ok(Ok(()));
        }
        let id = self.read_id("Enter sweet ID to purchase: ")?;
        let quantity = self.read_units("Enter quantity to purchase: ")?;

        let purchased = self.inventory.purchase(id, quantity);
        if purchased.is_ok() {
            writeln!(
                self.prompt.output(),
                "Successfully purchased {quantity} item(s)!"
            )?;
        }
        Ok(purchased)
    }

    fn restock(&mut self) -> PromptResult<Result<(), InventoryError>> {
        writeln!(self.prompt.output(), "\nRestock Sweet")?;
        if self.empty_notice()? {
            return Ok(Ok(()));
        }
        let id = self.read_id("Enter sweet ID to restock: ")?;
        let quantity = self.read_units("Enter quantity to add: ")?;

        let restocked = self.inventory.restock(id, quantity);
        if restocked.is_ok() {
            writeln!(
                self.prompt.output(),
                "Successfully restocked {quantity} item(s)!"
            )?;
        }
        Ok(restocked)
    }
}

/// Blank means no bound.
fn parse_bound(raw: &str) -> Result<Option<f64>, InventoryError> {
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<f64>()
        .map(Some)
        .map_err(|_| InventoryError::type_mismatch("price", raw))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
