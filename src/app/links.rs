// SPDX-License-Identifier: MPL-2.0
//! Handing outbound links (WhatsApp, `mailto:`) to the platform opener.

use tokio::process::Command;

/// Opens `url` with the desktop's default handler.
pub async fn open(url: String) -> Result<(), String> {
    let mut command = opener_command(&url);
    match command.status().await {
        Ok(status) if status.success() => {
            tracing::debug!(scheme = scheme(&url), "link handed to the platform opener");
            Ok(())
        }
        Ok(status) => {
            tracing::warn!(%status, scheme = scheme(&url), "platform opener failed");
            Err(format!("opener exited with {status}"))
        }
        Err(err) => {
            tracing::warn!(error = %err, "platform opener unavailable");
            Err(err.to_string())
        }
    }
}

#[cfg(target_os = "windows")]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", "", url]);
    command
}

#[cfg(target_os = "macos")]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(url);
    command
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    command
}

/// Scheme of `url`, logged instead of the link itself since it carries
/// the visitor's details.
fn scheme(url: &str) -> &str {
    url.split_once(':').map_or("", |(scheme, _)| scheme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_hides_the_rest_of_the_link() {
        assert_eq!(scheme("https://wa.me/55?text=Nome"), "https");
        assert_eq!(scheme("mailto:a@b.c"), "mailto");
        assert_eq!(scheme("nothing"), "");
    }
}
