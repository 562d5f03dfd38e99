pub(crate) use anyhow::{bail, Context};
pub(crate) use serde::{Deserialize, Serialize};
pub(crate) use std::cmp::Ordering;
pub(crate) use std::ffi::OsStr;
pub(crate) use std::fmt;
pub(crate) use std::fs::File;
pub(crate) use std::path::Path;

pub(crate) use crate::params::*;
pub(crate) use crate::traits::*;
