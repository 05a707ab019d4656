//! Entity types as consumed from the marketplace backend.
//!
//! The backend is authoritative for all of these: the console re-fetches
//! them per view and holds them only as transient state. Field names follow
//! the backend's camelCase wire shape; ids and statuses come from
//! `mango_market_core`.

pub mod banner;
pub mod category;
pub mod chat_order;
pub mod driver;
pub mod order;
pub mod product;
pub mod settings;
pub mod support;
pub mod user;
pub mod vendor;

pub use banner::Banner;
pub use category::Category;
pub use chat_order::{ChatOrder, ChatOrderLine, LineEdit};
pub use driver::{Driver, PersonalDetails, VehicleDetails};
pub use order::{
    Order, OrderCustomer, OrderDriver, OrderLine, OrderVendor, OrderVendorGroup, ShippingAddress,
};
pub use product::{NamedAttribute, Product, Variation, VariationAttributes};
pub use settings::StoreSettings;
pub use support::{ContactMessage, Faq, Inquiry, Ticket};
pub use user::{Customer, User};
pub use vendor::{Address, BankDetails, GeoPoint, Location, UpiDetails, Vendor, VendorInfo};
