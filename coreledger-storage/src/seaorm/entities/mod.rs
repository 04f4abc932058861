pub mod account_types;
pub mod accounts;
pub mod todos;

pub use account_types::{
    ActiveModel as AccountTypeActiveModel, Column as AccountTypeColumn, Entity as AccountTypes,
    Model as AccountTypeModel,
};
pub use accounts::{
    AccountStatusColumn, ActiveModel as AccountActiveModel, Column as AccountColumn, Entity as Accounts,
    Model as AccountModel, NormalBalanceColumn,
};
pub use todos::{ActiveModel as ToDoActiveModel, Column as ToDoColumn, Entity as ToDos, Model as ToDoModel};
