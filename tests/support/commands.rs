//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a lockbox command isolated to this environment.
    ///
    /// Returns a Command configured with:
    /// - Current directory set to the test project directory
    /// - Key and editor variables from the outer environment removed
    /// - Colors disabled
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("lockbox").expect("failed to find lockbox binary");
        cmd.current_dir(self.dir.path());
        cmd.env_remove("LOCKBOX_MASTER_KEY");
        cmd.env_remove("LOCKBOX_LOG");
        cmd.env_remove("EDITOR");
        cmd.env("NO_COLOR", "1");
        cmd
    }

    /// Shortcut for `lockbox generate-key --write`.
    pub fn generate_key(&self) -> Output {
        self.cmd()
            .args(["generate-key", "--write"])
            .output()
            .expect("failed to run lockbox generate-key")
    }

    /// Shortcut for `lockbox show`.
    pub fn show(&self) -> Output {
        self.cmd()
            .arg("show")
            .output()
            .expect("failed to run lockbox show")
    }

    /// Shortcut for `lockbox get <path>...`.
    pub fn get(&self, path: &[&str]) -> Output {
        self.cmd()
            .arg("get")
            .args(path)
            .output()
            .expect("failed to run lockbox get")
    }

    /// Run `lockbox edit` with the given editor command.
    pub fn edit_with(&self, editor: &str) -> Output {
        self.cmd()
            .arg("edit")
            .env("EDITOR", editor)
            .output()
            .expect("failed to run lockbox edit")
    }
}
