use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use std::path::Path;
use tokio::fs;

use super::error::{CommandError, CommandOutcome};
use super::registry::{Command, CommandContext, CommandResult};

pub struct ChangePermissionsCommand;

/// Parses a base-8 mode such as `644`, `0755` or `0o600`.
pub fn parse_mode(permissions: &str) -> Result<u32> {
    let digits = permissions
        .strip_prefix("0o")
        .or_else(|| permissions.strip_prefix("0O"))
        .unwrap_or(permissions);

    let mode = u32::from_str_radix(digits, 8)
        .with_context(|| format!("invalid octal permission string '{}'", permissions))?;
    if mode > 0o7777 {
        bail!("permission value '{}' is out of range", permissions);
    }

    Ok(mode)
}

impl ChangePermissionsCommand {
    #[cfg(unix)]
    async fn set_mode(&self, path: &Path, mode: u32) -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        fs::set_permissions(path, std::fs::Permissions::from_mode(mode))
            .await
            .with_context(|| format!("Failed to set permissions on '{}'", path.display()))
    }

    /// Only the read-only flag exists here: a mode without write bits sets it.
    #[cfg(not(unix))]
    async fn set_mode(&self, path: &Path, mode: u32) -> Result<()> {
        let mut permissions = fs::metadata(path)
            .await
            .with_context(|| format!("Failed to read metadata of '{}'", path.display()))?
            .permissions();
        permissions.set_readonly(mode & 0o222 == 0);

        fs::set_permissions(path, permissions)
            .await
            .with_context(|| format!("Failed to set permissions on '{}'", path.display()))
    }
}

#[async_trait]
impl Command for ChangePermissionsCommand {
    fn name(&self) -> &str {
        "change_permissions"
    }

    fn usage(&self) -> &'static str {
        "change_permissions <file_name> <permissions>"
    }

    fn min_args(&self) -> usize {
        2
    }

    async fn execute(
        &self,
        args: Vec<String>,
        context: &mut CommandContext,
    ) -> CommandOutcome<CommandResult> {
        self.check_args(&args)?;
        let (file_name, permissions) = (&args[1], &args[2]);

        let outcome = match parse_mode(permissions) {
            Ok(mode) => self.set_mode(&context.resolve(file_name), mode).await,
            Err(e) => Err(e),
        };
        outcome.map_err(|e| CommandError::operation("Error changing permissions", e))?;

        Ok(CommandResult::Success(format!(
            "Permissions of '{}' changed to '{}' successfully.",
            file_name, permissions
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn args(line: &str) -> Vec<String> {
        line.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!(parse_mode("644").unwrap(), 0o644);
        assert_eq!(parse_mode("0755").unwrap(), 0o755);
        assert_eq!(parse_mode("0o600").unwrap(), 0o600);
        assert_eq!(parse_mode("4755").unwrap(), 0o4755);
        assert!(parse_mode("999").is_err());
        assert!(parse_mode("rwx").is_err());
        assert!(parse_mode("0o").is_err());
        assert!(parse_mode("17777").is_err());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_change_permissions_sets_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("key.pem");
        std::fs::write(&path, "secret").unwrap();
        let mut context = CommandContext::new().with_working_directory(temp_dir.path().to_path_buf());

        let result = ChangePermissionsCommand
            .execute(args("change_permissions key.pem 600"), &mut context)
            .await
            .unwrap();
        assert_eq!(
            result,
            CommandResult::Success(
                "Permissions of 'key.pem' changed to '600' successfully.".to_string()
            )
        );

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o7777, 0o600);
    }

    #[tokio::test]
    async fn test_malformed_mode_is_operation_error() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("f.txt");
        std::fs::write(&path, "f").unwrap();
        let before = std::fs::metadata(&path).unwrap().permissions();
        let mut context = CommandContext::new().with_working_directory(temp_dir.path().to_path_buf());

        let err = ChangePermissionsCommand
            .execute(args("change_permissions f.txt 8"), &mut context)
            .await
            .unwrap_err();
        assert!(
            err.to_string()
                .starts_with("Error changing permissions: invalid octal permission string '8'")
        );
        assert_eq!(std::fs::metadata(&path).unwrap().permissions(), before);
    }

    #[tokio::test]
    async fn test_missing_file_is_operation_error() {
        let temp_dir = tempdir().unwrap();
        let mut context = CommandContext::new().with_working_directory(temp_dir.path().to_path_buf());

        let err = ChangePermissionsCommand
            .execute(args("change_permissions nope 644"), &mut context)
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("Error changing permissions: "));
    }
}
