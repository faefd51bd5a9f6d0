// src/cli/mod.rs
pub mod input;
pub mod menu;

use crate::core::manager::InventoryManager;
use crate::core::purchase::PurchaseService;
use crate::error::{CliError, InputError, InventoryError};
use crate::storage::traits::InventoryStore;
use crate::types::InventoryView;
use crate::utils::precision::format_money;
use anyhow::{Context, Result};
use input::{parse_choice, parse_name, parse_price, parse_quantity, Prompter};
use menu::{CustomerAction, ManagerAction, Role};
use std::io::{BufRead, Write};
use tracing::{debug, info};

const INVALID_NUMBER: &str = "Invalid input. Please enter a number.";
const INVALID_NAME: &str = "Invalid input. Please enter a fruit name.";
const INVALID_CHOICE: &str = "Invalid choice. Please try again.";
const LOAD_WARNING: &str =
    "Error reading the inventory file. Starting with an empty inventory.";

/// Where control goes after a sub-menu returns.
enum Flow {
    Back,
    Quit,
}

/// Result of one menu selection.
enum Step {
    Say(String),
    Leave,
}

pub struct App<S, R, W> {
    manager: InventoryManager<S>,
    prompter: Prompter<R, W>,
}

impl<S, R, W> App<S, R, W>
where
    S: InventoryStore,
    R: BufRead,
    W: Write,
{
    pub fn new(manager: InventoryManager<S>, input: R, output: W) -> Self {
        Self {
            manager,
            prompter: Prompter::new(input, output),
        }
    }

    pub fn run(&mut self) -> Result<()> {
        if self.manager.load_warning().is_some() {
            self.prompter.say(LOAD_WARNING)?;
        }

        loop {
            self.prompter.say(Role::MENU)?;
            let choice = match self.prompter.ask("Enter your role: ", parse_choice) {
                Ok(choice) => choice,
                Err(e) => match self.recover(e)? {
                    Flow::Back => continue,
                    Flow::Quit => break,
                },
            };

            let flow = match Role::from_choice(choice) {
                Some(Role::Manager) => self.manager_menu()?,
                Some(Role::Customer) => self.customer_menu()?,
                Some(Role::Exit) => {
                    self.prompter
                        .say("Thank you for using the Fruit Store application!")?;
                    break;
                }
                None => {
                    self.prompter.say(INVALID_CHOICE)?;
                    Flow::Back
                }
            };
            if let Flow::Quit = flow {
                break;
            }
        }

        info!("Session finished");
        Ok(())
    }

    fn manager_menu(&mut self) -> Result<Flow> {
        info!("Entered manager menu");
        loop {
            self.prompter.say(ManagerAction::MENU)?;
            let step = self
                .prompter
                .ask("\nEnter your choice: ", parse_choice)
                .and_then(|choice| match ManagerAction::from_choice(choice) {
                    Some(action) => self.manager_action(action),
                    None => Ok(Step::Say(INVALID_CHOICE.to_string())),
                });

            match step {
                Ok(Step::Say(message)) => self.prompter.say(&message)?,
                Ok(Step::Leave) => {
                    self.prompter.say("Exiting Manager Menu.")?;
                    return Ok(Flow::Back);
                }
                Err(e) => {
                    if let Flow::Quit = self.recover(e)? {
                        return Ok(Flow::Quit);
                    }
                }
            }
        }
    }

    fn customer_menu(&mut self) -> Result<Flow> {
        info!("Entered customer menu");
        loop {
            self.prompter.say(CustomerAction::MENU)?;
            let step = self
                .prompter
                .ask("\nEnter your choice: ", parse_choice)
                .and_then(|choice| match CustomerAction::from_choice(choice) {
                    Some(action) => self.customer_action(action),
                    None => Ok(Step::Say(INVALID_CHOICE.to_string())),
                });

            match step {
                Ok(Step::Say(message)) => self.prompter.say(&message)?,
                Ok(Step::Leave) => {
                    self.prompter.say("Exiting Customer Menu.")?;
                    return Ok(Flow::Back);
                }
                Err(e) => {
                    if let Flow::Quit = self.recover(e)? {
                        return Ok(Flow::Quit);
                    }
                }
            }
        }
    }

    /// Collects the action's arguments and runs it.
    fn manager_action(&mut self, action: ManagerAction) -> Result<Step, CliError> {
        let message = match action {
            ManagerAction::Add => {
                let name = self.prompter.ask("Enter fruit name: ", parse_name)?;
                let quantity = self.prompter.ask("Enter quantity: ", parse_quantity)?;
                let price = self.prompter.ask("Enter price per unit: ", parse_price)?;
                let result = self
                    .manager
                    .add_fruit(&name, quantity, price)
                    .map(|_| format!("{} added/updated successfully!", name));
                report(result)?
            }
            ManagerAction::View => render_view(&self.manager.view()),
            ManagerAction::UpdateQuantity => {
                let name = self.prompter.ask("Enter fruit name: ", parse_name)?;
                let delta = self
                    .prompter
                    .ask("Enter quantity to add: ", parse_quantity)?;
                let result = self
                    .manager
                    .update_quantity(&name, delta)
                    .map(|_| format!("{} quantity updated successfully!", name));
                report(result)?
            }
            ManagerAction::Remove => {
                let name = self
                    .prompter
                    .ask("Enter fruit name to remove: ", parse_name)?;
                let result = self
                    .manager
                    .remove_fruit(&name)
                    .map(|_| format!("{} removed from inventory.", name));
                report(result)?
            }
            ManagerAction::Exit => return Ok(Step::Leave),
        };
        Ok(Step::Say(message))
    }

    fn customer_action(&mut self, action: CustomerAction) -> Result<Step, CliError> {
        let message = match action {
            CustomerAction::View => render_view(&self.manager.view()),
            CustomerAction::Buy => {
                let name = self
                    .prompter
                    .ask("Enter fruit name to buy: ", parse_name)?;
                let quantity = self
                    .prompter
                    .ask("Enter quantity to buy: ", parse_quantity)?;
                let result = PurchaseService::new(&mut self.manager)
                    .buy_fruit(&name, quantity)
                    .map(|receipt| {
                        format!(
                            "You bought {} {}(s) for {} /-.",
                            receipt.quantity,
                            receipt.fruit,
                            format_money(receipt.total)
                        )
                    });
                report(result)?
            }
            CustomerAction::Exit => return Ok(Step::Leave),
        };
        Ok(Step::Say(message))
    }

    /// Prints the message for bad input and decides whether to keep going.
    /// Closed input ends the session; a failed save aborts it.
    fn recover(&mut self, error: CliError) -> Result<Flow> {
        match error {
            CliError::Input(InputError::Closed) => {
                info!("Input closed, leaving");
                Ok(Flow::Quit)
            }
            CliError::Input(e) => {
                debug!("Rejected input: {}", e);
                let message = match e {
                    InputError::EmptyName => INVALID_NAME,
                    _ => INVALID_NUMBER,
                };
                self.prompter.say(message)?;
                Ok(Flow::Back)
            }
            CliError::Io(e) => Err(e).context("terminal i/o failed"),
            CliError::Store(e) => Err(e).context("failed to save inventory"),
        }
    }

    #[cfg(test)]
    fn into_parts(self) -> (InventoryManager<S>, W) {
        (self.manager, self.prompter.into_output())
    }
}

/// Turns a domain outcome into user text. Persistence failures are passed up.
fn report(result: Result<String, InventoryError>) -> Result<String, CliError> {
    match result {
        Ok(message) => Ok(message),
        Err(InventoryError::Store(e)) => Err(CliError::Store(e)),
        Err(InventoryError::NotFound(name)) => Ok(format!("{} not found in inventory.", name)),
        Err(InventoryError::Unavailable(name)) => {
            Ok(format!("{} is not available in the inventory.", name))
        }
        Err(InventoryError::InsufficientStock { fruit, available }) => Ok(format!(
            "Sorry, only {} {}(s) available.",
            available, fruit
        )),
        Err(InventoryError::TotalOverflow { fruit, quantity }) => Ok(format!(
            "Sorry, the total for {} {}(s) is too large to charge.",
            quantity, fruit
        )),
    }
}

pub fn render_view(view: &InventoryView) -> String {
    match view {
        InventoryView::Empty => "The inventory is empty.".to_string(),
        InventoryView::Stock(lines) => {
            let mut out = String::from("\nFruit Inventory:\n-----------------");
            for line in lines {
                out.push_str(&format!(
                    "\n{}: Quantity = {}, Price = {} /-",
                    line.name,
                    line.quantity,
                    format_money(line.price)
                ));
            }
            out
        }
    }
}
