mod catalog;
mod device_table;
mod forms;
mod group_table;
mod loading;

pub use catalog::{Catalog, CatalogRevision};
pub use device_table::DeviceTable;
pub use forms::{ColorFormView, DeviceFormView, GroupFormView};
pub use group_table::GroupTable;
pub use loading::Loading;
