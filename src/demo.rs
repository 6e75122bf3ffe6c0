//! Catalog of runnable snippets.

use crate::behavioral::{command, strategy};
use crate::console::Console;
use crate::creational::{abstract_factory, builder, singleton};
use crate::error::PatternError;
use crate::structural::{adapter, decorator, facade};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Demo {
    Command,
    FunctionalCommand,
    Strategy,
    AbstractFactory,
    Builder,
    Singleton,
    Adapter,
    Decorator,
    Facade,
}

impl Demo {
    pub const ALL: [Demo; 9] = [
        Demo::Command,
        Demo::FunctionalCommand,
        Demo::Strategy,
        Demo::AbstractFactory,
        Demo::Builder,
        Demo::Singleton,
        Demo::Adapter,
        Demo::Decorator,
        Demo::Facade,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Demo::Command => "command",
            Demo::FunctionalCommand => "functional-command",
            Demo::Strategy => "strategy",
            Demo::AbstractFactory => "abstract-factory",
            Demo::Builder => "builder",
            Demo::Singleton => "singleton",
            Demo::Adapter => "adapter",
            Demo::Decorator => "decorator",
            Demo::Facade => "facade",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Demo::Command => "Command Pattern",
            Demo::FunctionalCommand => "Command Pattern (Closures)",
            Demo::Strategy => "Strategy Pattern",
            Demo::AbstractFactory => "Abstract Factory Pattern",
            Demo::Builder => "Builder Pattern",
            Demo::Singleton => "Singleton Pattern",
            Demo::Adapter => "Adapter Pattern",
            Demo::Decorator => "Decorator Pattern",
            Demo::Facade => "Facade Pattern",
        }
    }

    pub fn run(self, out: &mut dyn Console) {
        match self {
            Demo::Command => command::drive(out),
            Demo::FunctionalCommand => command::drive_functional(out),
            Demo::Strategy => strategy::drive(out),
            Demo::AbstractFactory => abstract_factory::drive(out),
            Demo::Builder => builder::drive(out),
            Demo::Singleton => singleton::drive(out),
            Demo::Adapter => adapter::drive(out),
            Demo::Decorator => decorator::drive(out),
            Demo::Facade => facade::drive(out),
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|demo| demo.name()).collect()
    }
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Demo {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|demo| demo.name() == wanted)
            .ok_or_else(|| PatternError::unknown_demo(s, &Self::names()))
    }
}
