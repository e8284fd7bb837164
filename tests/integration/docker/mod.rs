//! Docker integration tests
//!
//! Starts real containers and checks the generated services.

#[cfg(all(test, feature = "docker"))]
mod tests {
    use crate::integration::common::*;
    use container2compose::{
        CliEngine, ComposeGenerator, Engine, GeneratorOptions, Notifier,
    };

    #[test]
    fn test_docker_engine_creation() {
        let engine = CliEngine::docker();
        assert!(engine.is_ok(), "Should be able to reach the Docker daemon");
        assert_eq!(engine.unwrap().name(), "docker");
    }

    #[test]
    fn test_docker_inspect_nonexistent_container() {
        let engine = CliEngine::docker().expect("Should connect to docker");
        let result = engine.inspect_container(NONEXISTENT_CONTAINER);
        assert!(result.is_err(), "Inspecting a missing container should fail");
    }

    #[test]
    fn test_docker_linked_containers() {
        let _db = ScratchContainer::start("docker", "c2c-test-db", &[]).expect("Should start db");
        let _web = ScratchContainer::start(
            "docker",
            "c2c-test-web",
            &[
                "--link",
                "c2c-test-db:database",
                "-e",
                "APP_ENV=test",
                "-p",
                "127.0.0.1:18080:80",
                "-v",
                "/tmp:/host-tmp:ro",
                "--restart",
                "unless-stopped",
            ],
        )
        .expect("Should start web");

        let engine = CliEngine::docker().expect("Should connect to docker");
        let generator = ComposeGenerator::new(engine, Notifier::new(0), GeneratorOptions::default());
        let report = generator.generate(&["c2c-test-web", "c2c-test-db", NONEXISTENT_CONTAINER]);

        assert_eq!(report.skipped.len(), 1);
        let web = &report.document.services["c2c-test-web"];
        assert_eq!(web.image, TEST_IMAGE);
        assert_eq!(web.links, vec!["c2c-test-db:database".to_string()]);
        assert!(web.external_links.is_empty());
        assert_eq!(web.environment, vec!["APP_ENV=test".to_string()]);
        assert_eq!(web.ports, vec!["127.0.0.1:18080:80".to_string()]);
        assert_eq!(web.volumes, vec!["/tmp:/host-tmp:r".to_string()]);
        assert_eq!(web.command, vec!["sleep".to_string(), "300".to_string()]);
        assert_eq!(web.restart, "unless-stopped");

        let db = &report.document.services["c2c-test-db"];
        assert!(db.links.is_empty());
        assert!(db.environment.is_empty());
        assert!(db.restart.is_empty());
    }
}
