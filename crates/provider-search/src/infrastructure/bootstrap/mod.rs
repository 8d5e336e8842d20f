mod projection_worker;

pub use projection_worker::{run_projection_worker, ProjectionWorkerConfig};
