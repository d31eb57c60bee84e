//! Constant continuous knock barriers.

use crate::domain::codes::CodedEnum;
use crate::domain::columns::{BARRIER_LEVEL, BARRIER_TYPE, KNOCK_TYPE};
use crate::domain::error::LoaderError;
use crate::domain::fields::get_value;
use crate::domain::parsers::{parse_barrier_type, parse_double, parse_knock_type};
use crate::ports::row_port::RowPort;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BarrierType {
    Up,
    Down,
}

impl CodedEnum for BarrierType {
    const KIND: &'static str = "BarrierType";

    fn variants() -> &'static [Self] {
        &[BarrierType::Up, BarrierType::Down]
    }

    fn code(self) -> &'static str {
        match self {
            BarrierType::Up => "U",
            BarrierType::Down => "D",
        }
    }

    fn name(self) -> &'static str {
        match self {
            BarrierType::Up => "Up",
            BarrierType::Down => "Down",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnockType {
    KnockIn,
    KnockOut,
}

impl CodedEnum for KnockType {
    const KIND: &'static str = "KnockType";

    fn variants() -> &'static [Self] {
        &[KnockType::KnockIn, KnockType::KnockOut]
    }

    fn code(self) -> &'static str {
        match self {
            KnockType::KnockIn => "I",
            KnockType::KnockOut => "O",
        }
    }

    fn name(self) -> &'static str {
        match self {
            KnockType::KnockIn => "KnockIn",
            KnockType::KnockOut => "KnockOut",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            KnockType::KnockIn => &["IN"],
            KnockType::KnockOut => &["OUT"],
        }
    }
}

/// A barrier at a single level, monitored continuously.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Barrier {
    pub barrier_type: BarrierType,
    pub knock_type: KnockType,
    pub level: f64,
}

impl Barrier {
    pub fn of(barrier_type: BarrierType, knock_type: KnockType, level: f64) -> Self {
        Self {
            barrier_type,
            knock_type,
            level,
        }
    }

    /// The level is the same on every date.
    pub fn level_on(&self, _date: NaiveDate) -> f64 {
        self.level
    }

    /// Same barrier with knock-in and knock-out swapped.
    pub fn inverse(&self) -> Self {
        let knock_type = match self.knock_type {
            KnockType::KnockIn => KnockType::KnockOut,
            KnockType::KnockOut => KnockType::KnockIn,
        };
        Self { knock_type, ..*self }
    }
}

pub fn parse_barrier(
    row: &dyn RowPort,
    barrier_type_column: &str,
    knock_type_column: &str,
    barrier_level_column: &str,
) -> Result<Barrier, LoaderError> {
    let barrier_type = get_value(row, barrier_type_column, parse_barrier_type)?;
    let knock_type = get_value(row, knock_type_column, parse_knock_type)?;
    let level = get_value(row, barrier_level_column, parse_double)?;
    Ok(Barrier::of(barrier_type, knock_type, level))
}

pub fn parse_barrier_from_default_fields(row: &dyn RowPort) -> Result<Barrier, LoaderError> {
    parse_barrier(row, BARRIER_TYPE, KNOCK_TYPE, BARRIER_LEVEL)
}
