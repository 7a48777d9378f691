pub mod aspects;

pub mod campaigns;

pub mod evaluations;

pub mod generic_evaluations;

pub mod questions;

pub mod system;

pub mod valuations;

pub use aspects::configure_aspect_routes;
pub use campaigns::configure_campaign_routes;
pub use evaluations::configure_evaluation_routes;
pub use generic_evaluations::configure_generic_evaluation_routes;
pub use questions::configure_question_routes;
pub use system::configure_system_routes;
pub use valuations::configure_valuation_routes;
