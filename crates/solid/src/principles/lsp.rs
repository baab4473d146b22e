//! Liskov Substitution Principle
//!
//! Anything implementing a trait must be usable wherever the trait is
//! expected without breaking the caller.
//!
//! [`BirdV1`] promises that every bird can fly, so [`PenguinV1`] has to
//! implement `fly` and can only fail. [`BirdV2`] keeps what all birds share
//! and moves flight into [`Flyable`], which penguins never implement. A
//! penguin cannot even be handed to [`test_fly_v2`]:
//!
//! ```compile_fail
//! use solid::principles::lsp::{test_fly_v2, PenguinV2};
//!
//! let mut out = Vec::new();
//! test_fly_v2(&PenguinV2, &mut out).unwrap();
//! ```
//!
//! The notification services show the same break with a capability
//! ([`NotificationService::attach_file`]) that SMS cannot honour.

use std::io::Write;

use crate::context::DemoContext;
use crate::error::{Result, SolidError};
use crate::principles::Principle;

// ═══════════════════════════════════════════════════════════════════════
// Birds
// ═══════════════════════════════════════════════════════════════════════

/// A bird that is assumed to fly.
pub trait BirdV1 {
    /// Fly. The default is the generic bird behavior.
    fn fly(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Bird is flying")?;
        Ok(())
    }
}

/// A bird with nothing more specific to say.
#[derive(Debug, Default)]
pub struct GenericBirdV1;

impl BirdV1 for GenericBirdV1 {}

/// A sparrow.
#[derive(Debug, Default)]
pub struct SparrowV1;

impl BirdV1 for SparrowV1 {
    fn fly(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Sparrow is flying")?;
        Ok(())
    }
}

/// A penguin forced to claim it can fly.
#[derive(Debug, Default)]
pub struct PenguinV1;

impl BirdV1 for PenguinV1 {
    fn fly(&self, _out: &mut dyn Write) -> Result<()> {
        Err(SolidError::unsupported("Penguins cannot fly"))
    }
}

/// Make any [`BirdV1`] fly.
pub fn test_fly_v1(bird: &dyn BirdV1, out: &mut dyn Write) -> Result<()> {
    bird.fly(out)
}

/// What every bird has, flying or not.
pub trait BirdV2 {
    /// Species name.
    fn species(&self) -> &'static str;
}

/// Something that can actually fly.
pub trait Flyable {
    /// Fly.
    fn fly(&self, out: &mut dyn Write) -> Result<()>;
}

/// A sparrow: a bird that flies.
#[derive(Debug, Default)]
pub struct SparrowV2;

impl BirdV2 for SparrowV2 {
    fn species(&self) -> &'static str {
        "Sparrow"
    }
}

impl Flyable for SparrowV2 {
    fn fly(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{} is flying", self.species())?;
        Ok(())
    }
}

/// A penguin: a bird, and nothing more.
#[derive(Debug, Default)]
pub struct PenguinV2;

impl BirdV2 for PenguinV2 {
    fn species(&self) -> &'static str {
        "Penguin"
    }
}

/// Make anything [`Flyable`] fly.
pub fn test_fly_v2(flyable: &dyn Flyable, out: &mut dyn Write) -> Result<()> {
    flyable.fly(out)
}

// ═══════════════════════════════════════════════════════════════════════
// Notifications
// ═══════════════════════════════════════════════════════════════════════

/// A channel that sends messages and, supposedly, file attachments.
pub trait NotificationService {
    /// Send a message.
    fn send_notification(&self, message: &str, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Sending notification: {}", message)?;
        Ok(())
    }

    /// Attach a file to the next message.
    fn attach_file(&self, file_path: &str, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Attaching file: {}", file_path)?;
        Ok(())
    }
}

/// Email: supports both.
#[derive(Debug, Default)]
pub struct EmailNotificationService;

impl NotificationService for EmailNotificationService {
    fn send_notification(&self, message: &str, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Sending email notification: {}", message)?;
        Ok(())
    }

    fn attach_file(&self, file_path: &str, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Attaching file to email: {}", file_path)?;
        Ok(())
    }
}

/// SMS: sends text, but cannot carry attachments.
#[derive(Debug, Default)]
pub struct SmsNotificationService;

impl NotificationService for SmsNotificationService {
    fn send_notification(&self, message: &str, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Sending SMS notification: {}", message)?;
        Ok(())
    }

    fn attach_file(&self, _file_path: &str, _out: &mut dyn Write) -> Result<()> {
        Err(SolidError::unsupported("SMS does not support file attachments"))
    }
}

/// Run the LSP demonstration.
///
/// The compliant calls come first. The run then ends on the penguin,
/// unless violations are disabled in `ctx`. The SMS attachment is never
/// attempted here; [`SmsNotificationService::attach_file`] fails on its own.
pub fn run(ctx: &DemoContext, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}", Principle::Lsp.title())?;

    test_fly_v1(&SparrowV1, out)?;
    test_fly_v2(&SparrowV2, out)?;

    let services: [(&dyn NotificationService, &str); 2] = [
        (&EmailNotificationService, "Hello via Email!"),
        (&SmsNotificationService, "Hello via SMS!"),
    ];
    for (service, message) in services {
        service.send_notification(message, out)?;
    }
    EmailNotificationService.attach_file("file.txt", out)?;

    ctx.violate("test_fly_v1(PenguinV1)", || test_fly_v1(&PenguinV1, out))
}
