mod charts;
mod list;

mod login;
pub use login::Login;

mod dashboard;
pub use dashboard::Dashboard;

mod users;
pub use users::{Users, UsersPanel};

mod payments;
pub use payments::{Payments, PaymentsPanel};

mod complaints;
pub use complaints::{Complaints, ComplaintsPanel};
