pub mod snapshot_helpers;
