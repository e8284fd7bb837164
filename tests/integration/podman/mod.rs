//! Podman integration tests

#[cfg(all(test, feature = "podman"))]
mod tests {
    use crate::integration::common::*;
    use container2compose::{CliEngine, Engine};

    #[test]
    fn test_podman_engine_creation() {
        let engine = CliEngine::podman();
        assert!(engine.is_ok(), "Should be able to run podman");
        assert_eq!(engine.unwrap().name(), "podman");
    }

    #[test]
    fn test_podman_inspect_running_container() {
        let app = ScratchContainer::start("podman", "c2c-test-podman", &[])
            .expect("Should start container");

        let engine = CliEngine::podman().expect("Should connect to podman");
        let record = engine
            .inspect_container(&app.name)
            .expect("Should inspect container");

        assert_eq!(record.name.trim_start_matches('/'), "c2c-test-podman");
        assert!(engine.inspect_container(NONEXISTENT_CONTAINER).is_err());
    }
}
