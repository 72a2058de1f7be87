//! Centralized icon definitions.
//!
//! Maps semantic icon names to the bootstrap set so components never name a
//! concrete icon pack directly.

use icondata::Icon;

pub const GITHUB: Icon = icondata::BsGithub;
pub const LINKEDIN: Icon = icondata::BsLinkedin;
pub const SEARCH: Icon = icondata::BsSearch;
pub const CLOSE: Icon = icondata::BsXLg;
pub const DOWNLOAD: Icon = icondata::BsDownload;
pub const ENVELOPE: Icon = icondata::BsEnvelope;
