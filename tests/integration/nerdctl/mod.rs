//! Nerdctl integration tests

#[cfg(all(test, feature = "nerdctl"))]
mod tests {
    use crate::integration::common::*;
    use container2compose::{
        CliEngine, ComposeGenerator, Engine, GeneratorOptions, Notifier,
    };

    #[test]
    fn test_nerdctl_engine_creation() {
        let engine = CliEngine::nerdctl();
        assert!(engine.is_ok(), "Should be able to reach containerd through nerdctl");
        assert_eq!(engine.unwrap().name(), "nerdctl");
    }

    #[test]
    fn test_nerdctl_single_container() {
        let _app = ScratchContainer::start("nerdctl", "c2c-test-nerdctl", &["-e", "FOO=bar"])
            .expect("Should start container");

        let engine = CliEngine::nerdctl().expect("Should connect to nerdctl");
        let generator = ComposeGenerator::new(engine, Notifier::new(0), GeneratorOptions::default());
        let report = generator.generate(&["c2c-test-nerdctl"]);

        assert!(report.is_complete());
        let app = &report.document.services["c2c-test-nerdctl"];
        assert!(app.environment.contains(&"FOO=bar".to_string()));
    }
}
