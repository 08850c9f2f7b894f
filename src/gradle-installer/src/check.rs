use crate::download::DownloadTool;
use crate::installation::ResolvedInstallation;
use crate::platform::Platform;
use console::Emoji;
use gradle_common::{error_message, success_message, warning_message};

/// A preflight check reported by `gradle-installer check`.
pub trait PreflightCheck {
    fn check(&self) -> bool;
    fn name(&self) -> &'static str;
    fn error_message(&self) -> String;
    fn success_message(&self) -> String;
    /// Whether a failing check means an install cannot succeed.
    fn required(&self) -> bool {
        true
    }
}

/// A program that must be on `PATH`.
pub struct ProgramCheck {
    name: &'static str,
    program: String,
}

impl ProgramCheck {
    pub fn download_tool(tool: DownloadTool) -> Self {
        Self {
            name: "Download Tool",
            program: tool.program().to_string(),
        }
    }

    pub fn extract_tool(platform: Platform) -> Self {
        Self {
            name: "Extraction Tool",
            program: platform.capabilities().extract_program.to_string(),
        }
    }
}

impl PreflightCheck for ProgramCheck {
    fn check(&self) -> bool {
        which::which(&self.program).is_ok()
    }

    fn name(&self) -> &'static str {
        self.name
    }

    fn error_message(&self) -> String {
        format!("`{}` not found on PATH", self.program)
    }

    fn success_message(&self) -> String {
        match which::which(&self.program) {
            Ok(path) => format!("`{}` at {}", self.program, path.display()),
            Err(_) => format!("`{}` found", self.program),
        }
    }
}

pub struct InstallationCheck(pub ResolvedInstallation);

impl PreflightCheck for InstallationCheck {
    fn check(&self) -> bool {
        self.0.is_installed()
    }

    fn name(&self) -> &'static str {
        "Gradle Installation"
    }

    fn error_message(&self) -> String {
        format!(
            "not installed at {}, `install` will download it",
            self.0.install_path.display()
        )
    }

    fn success_message(&self) -> String {
        format!("installed at {}", self.0.install_path.display())
    }

    fn required(&self) -> bool {
        false
    }
}

pub struct CheckManager {
    checks: Vec<Box<dyn PreflightCheck>>,
}

impl CheckManager {
    pub fn new(platform: Platform, tool: DownloadTool, installation: ResolvedInstallation) -> Self {
        let checks: Vec<Box<dyn PreflightCheck>> = vec![
            Box::new(ProgramCheck::download_tool(tool)),
            Box::new(ProgramCheck::extract_tool(platform)),
            Box::new(InstallationCheck(installation)),
        ];

        Self { checks }
    }

    /// Reports one line per check on stderr. Returns false if any required check failed.
    ///
    /// The platform itself is not checked here: an unsupported OS fails before the
    /// checks are built.
    pub fn run_all(&self) -> bool {
        const PASS: Emoji<'_, '_> = Emoji("✅ ", "");
        const FAIL: Emoji<'_, '_> = Emoji("❌ ", "");
        const SKIP: Emoji<'_, '_> = Emoji("➖ ", "");

        let mut all_passed = true;

        for check in &self.checks {
            let label = format!("{:<22}", check.name());
            if check.check() {
                success_message!("{PASS}{label} {}", check.success_message());
            } else if check.required() {
                all_passed = false;
                error_message!("{FAIL}{label} {}", check.error_message());
            } else {
                warning_message!("{SKIP}{label} {}", check.error_message());
            }
        }

        if all_passed {
            success_message!("Environment ready for installation");
        } else {
            error_message!("Some requirements failed. Gradle cannot be installed.");
        }
        all_passed
    }
}
