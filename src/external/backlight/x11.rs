use super::{property, BacklightController, BacklightError, BacklightRange, Result};
use log::{debug, info};
use x11rb::{
    connection::{Connection, RequestConnection},
    errors::ReplyError,
    protocol::{
        randr::{self, ConnectionExt as _, Output},
        xproto::{Atom, AtomEnum, ConnectionExt as _, PropMode},
    },
    rust_connection::RustConnection,
};

/// A session controlling the backlight of the first RandR output of a display.
///
/// The backlight is exposed by the X server as an integer output property.
/// The property atom, the output and the range of valid values are resolved
/// once, when the session is created. The current value is always fetched from
/// the server.
#[derive(Debug)]
pub struct X11Backlight {
    connection: RustConnection,
    output: Output,
    /// X11 atom naming the backlight output property
    atom: Atom,
    range: Option<BacklightRange>,
}

impl X11Backlight {
    /// Connect to the display and set up backlight control on its first output.
    ///
    /// With `None`, the display named by the `DISPLAY` environment variable is used.
    pub fn connect(display_name: Option<&str>) -> Result<X11Backlight> {
        let (connection, screen_num) = RustConnection::connect(display_name)?;
        if connection
            .extension_information(randr::X11_EXTENSION_NAME)
            .map_err(|err| BacklightError::VersionReply(err.into()))?
            .is_none()
        {
            return Err(BacklightError::MissingExtension);
        }
        let (major, minor) = property::REQUIRED_VERSION;
        let version = connection
            .randr_query_version(major, minor)
            .map_err(ReplyError::from)
            .and_then(|cookie| cookie.reply())
            .map_err(BacklightError::VersionReply)?;
        debug!(
            "Server supports RandR {}.{}",
            version.major_version, version.minor_version
        );
        property::check_version(version.major_version, version.minor_version)?;

        let atom = Self::resolve_atom(&connection)?;
        let root = connection.setup().roots[screen_num].root;
        let resources = connection
            .randr_get_screen_resources(root)
            .map_err(ReplyError::from)
            .and_then(|cookie| cookie.reply())
            .map_err(BacklightError::ResourcesReply)?;
        let output = *resources
            .outputs
            .first()
            .ok_or(BacklightError::NoOutputs)?;
        debug!(
            "Using output {} out of {}",
            output,
            resources.outputs.len()
        );

        let mut backlight = X11Backlight {
            connection,
            output,
            atom,
            range: None,
        };
        backlight.range = backlight.fetch_range()?;
        info!(
            "Backlight session established on output {}, range {:?}",
            output, backlight.range
        );
        Ok(backlight)
    }

    fn resolve_atom(connection: &RustConnection) -> Result<Atom> {
        for name in [property::BACKLIGHT_NAME, property::LEGACY_BACKLIGHT_NAME] {
            let atom = connection
                .intern_atom(true, name.as_bytes())
                .map_err(ReplyError::from)
                .and_then(|cookie| cookie.reply())
                .map_err(BacklightError::AtomReply)?
                .atom;
            if atom != x11rb::NONE {
                debug!("Backlight property resolved as {} ({})", name, atom);
                return Ok(atom);
            }
        }
        Err(BacklightError::PropertyAbsent)
    }

    /// Fetch the valid values of the property, provided the output carries it.
    fn fetch_range(&self) -> Result<Option<BacklightRange>> {
        if let Err(err) = self.get() {
            info!(
                "Output {} has no readable backlight, its range is unavailable: {}",
                self.output, err
            );
            return Ok(None);
        }
        let reply = self
            .connection
            .randr_query_output_property(self.output, self.atom)
            .map_err(ReplyError::from)
            .and_then(|cookie| cookie.reply())
            .map_err(BacklightError::RangeReply)?;
        BacklightRange::try_from(&reply).map(Some)
    }

    /// The output whose backlight is controlled.
    pub fn output(&self) -> Output {
        self.output
    }

    /// Flush any pending requests and close the connection to the display.
    pub fn close(self) -> Result<()> {
        debug!("Closing backlight session of output {}", self.output);
        self.connection.flush()?;
        Ok(())
    }
}

impl BacklightController for X11Backlight {
    fn get(&self) -> Result<i32> {
        debug!("Fetching backlight of output {}", self.output);
        let reply = self
            .connection
            .randr_get_output_property(self.output, self.atom, x11rb::NONE, 0, 4, false, false)
            .map_err(ReplyError::from)
            .and_then(|cookie| cookie.reply())
            .map_err(BacklightError::PropertyReply)?;
        property::value_from_reply(&reply)
    }

    fn set(&self, value: i32) -> Result<()> {
        debug!("Setting backlight of output {} to {}", self.output, value);
        // Nobody waits for the reply, errors of the request end up in the event queue.
        let _ = self.connection.randr_change_output_property(
            self.output,
            self.atom,
            u32::from(AtomEnum::INTEGER),
            32,
            PropMode::REPLACE,
            1,
            &value.to_ne_bytes(),
        )?;
        self.connection.flush()?;
        Ok(())
    }

    fn range(&self) -> Option<BacklightRange> {
        self.range
    }
}
