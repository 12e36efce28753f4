//! Scripted input sessions for headless runs.
//!
//! A script is a JSON list of steps. Each step fires on a frame number and
//! may press or release keys, move the aim target or turn the caster.
//!
//! ```json
//! [
//!   { "tick": 0, "press": ["Cast"] },
//!   { "tick": 1, "release": ["Cast"] },
//!   { "tick": 90, "aim": [20.0, 10.0, 0.0], "yaw": 15.0 }
//! ]
//! ```

use std::fs;
use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use fishing_sim::core::config::ConfigError;
use fishing_sim::core::input::Key;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptStep {
    /// Frame the step applies to, counted from zero including paused frames.
    pub tick: u64,
    pub press: Vec<Key>,
    pub release: Vec<Key>,
    pub aim: Option<Vec3>,
    /// Caster yaw in degrees.
    pub yaw: Option<f32>,
}

/// Steps ordered by frame.
#[derive(Debug, Clone, Default)]
pub struct InputScript {
    steps: Vec<ScriptStep>,
}

impl InputScript {
    pub fn from_steps(mut steps: Vec<ScriptStep>) -> Self {
        steps.sort_by_key(|step| step.tick);
        Self { steps }
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        let script = Self::from_steps(serde_json::from_str(&json)?);
        log::info!("loaded {} script steps from {}", script.len(), path.display());
        Ok(script)
    }

    /// Steps scheduled for `tick`, in file order.
    pub fn steps_at(&self, tick: u64) -> impl Iterator<Item = &ScriptStep> {
        let start = self.steps.partition_point(|step| step.tick < tick);
        self.steps[start..]
            .iter()
            .take_while(move |step| step.tick == tick)
    }

    /// Frame of the last step, if any.
    pub fn last_tick(&self) -> Option<u64> {
        self.steps.last().map(|step| step.tick)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sparse_steps() {
        let json = r#"[
            { "tick": 90, "aim": [1.0, 2.0, 0.0], "yaw": 15.0 },
            { "tick": 0, "press": ["Cast"] },
            { "tick": 0, "release": ["Reel"] }
        ]"#;
        let steps: Vec<ScriptStep> = serde_json::from_str(json).unwrap();
        let script = InputScript::from_steps(steps);

        assert_eq!(script.len(), 3);
        assert_eq!(script.last_tick(), Some(90));

        let first: Vec<_> = script.steps_at(0).collect();
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].press, vec![Key::Cast]);
        assert_eq!(first[1].release, vec![Key::Reel]);

        let late: Vec<_> = script.steps_at(90).collect();
        assert_eq!(late[0].aim, Some(Vec3::new(1.0, 2.0, 0.0)));
        assert_eq!(late[0].yaw, Some(15.0));
        assert_eq!(script.steps_at(45).count(), 0);
    }

    #[test]
    fn load_reports_bad_json() {
        let dir = std::env::temp_dir().join(format!("fishing-script-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.json");
        fs::write(&path, r#"[{ "tick": "soon" }]"#).unwrap();

        assert!(matches!(InputScript::load(&path), Err(ConfigError::Json(_))));
        assert!(matches!(
            InputScript::load(&dir.join("missing.json")),
            Err(ConfigError::Io(_))
        ));
        fs::remove_dir_all(&dir).ok();
    }
}
