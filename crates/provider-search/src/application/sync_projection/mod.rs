mod projection_synchronizer;


pub use projection_synchronizer::ProjectionSynchronizer;
