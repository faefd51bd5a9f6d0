// src/cli/menu.rs

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Manager,
    Customer,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagerAction {
    Add,
    View,
    UpdateQuantity,
    Remove,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerAction {
    View,
    Buy,
    Exit,
}

impl Role {
    pub const MENU: &'static str = "\nFruit Store Application\n1. Manager\n2. Customer\n3. Exit";

    pub fn from_choice(choice: u32) -> Option<Self> {
        match choice {
            1 => Some(Role::Manager),
            2 => Some(Role::Customer),
            3 => Some(Role::Exit),
            _ => None,
        }
    }
}

impl ManagerAction {
    pub const MENU: &'static str = "\nManager Menu:\n\
        1. Add Fruit to Inventory\n\
        2. View Inventory\n\
        3. Update Fruit Quantity\n\
        4. Remove Fruit from Inventory\n\
        5. Exit";

    pub fn from_choice(choice: u32) -> Option<Self> {
        match choice {
            1 => Some(ManagerAction::Add),
            2 => Some(ManagerAction::View),
            3 => Some(ManagerAction::UpdateQuantity),
            4 => Some(ManagerAction::Remove),
            5 => Some(ManagerAction::Exit),
            _ => None,
        }
    }
}

impl CustomerAction {
    pub const MENU: &'static str = "\nCustomer Menu:\n1. View Fruit Stock\n2. Buy Fruit\n3. Exit";

    pub fn from_choice(choice: u32) -> Option<Self> {
        match choice {
            1 => Some(CustomerAction::View),
            2 => Some(CustomerAction::Buy),
            3 => Some(CustomerAction::Exit),
            _ => None,
        }
    }
}
