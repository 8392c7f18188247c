use crate::core::auth::{ChangePasswordForm, LoginForm};
use crate::utils::colors::{BLUE, RED, paint};
use crate::utils::formatting::bold;

/// Login card: title, inline error, and the password-change disclosure.
pub fn render(form: &LoginForm, change: &ChangePasswordForm) -> String {
    let mut out = format!("{}\n", bold("Login"));
    if !form.email.is_empty() {
        out.push_str(&format!("  Email: {}\n", form.email));
    }
    if let Some(err) = &form.error {
        out.push_str(&format!("  {}\n", paint(err, RED)));
    }
    out.push_str(&format!("\n  {}\n", paint(change.toggle_label(), BLUE)));
    out
}
