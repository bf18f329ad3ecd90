/********************************************************************************
 * Copyright (c) 2026 Contributors to the Eclipse Foundation
 *
 * See the NOTICE file(s) distributed with this work for additional
 * information regarding copyright ownership.
 *
 * This program and the accompanying materials are made available under the
 * terms of the Apache License Version 2.0 which is available at
 * https://www.apache.org/licenses/LICENSE-2.0
 *
 * SPDX-License-Identifier: Apache-2.0
 ********************************************************************************/

//! Bus subject topology.
//!
//! Every subject the proxy touches is derived here from the configured
//! prefix. Request subjects embed an application and a node segment; either
//! segment may be empty, which widens the match to "any". The server
//! subscribes to the three resulting scopes per verb: cluster (`verb..`),
//! application (`verb.app.`), and node (`verb.app.node`).

use std::fmt;
use std::str::FromStr;

/// Default prefix prepended to every subject.
pub const DEFAULT_PREFIX: &str = "ari.";

/// Queue group shared by all create-verb subscriptions, so that exactly one
/// proxy in an application cluster services each create request.
pub const CREATE_QUEUE_GROUP: &str = "ariproxy";

/// Request classes understood by the proxy.
///
/// `Get` and `Data` are read-only lookups, `Command` mutates an existing
/// resource, `Create` makes a new one. Reads and commands are broadcast to
/// every proxy in scope; creates are load-balanced through
/// [`CREATE_QUEUE_GROUP`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Verb {
    Get,
    Data,
    Command,
    Create,
}

impl Verb {
    pub const ALL: [Verb; 4] = [Verb::Get, Verb::Data, Verb::Command, Verb::Create];

    /// The verbs delivered to every proxy in scope (everything but create).
    pub const BROADCAST: [Verb; 3] = [Verb::Get, Verb::Data, Verb::Command];

    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "get",
            Verb::Data => "data",
            Verb::Command => "command",
            Verb::Create => "create",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verb {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "get" => Ok(Verb::Get),
            "data" => Ok(Verb::Data),
            "command" => Ok(Verb::Command),
            "create" => Ok(Verb::Create),
            _ => Err(()),
        }
    }
}

/// Subject on which directed pings arrive.
pub fn ping(prefix: &str) -> String {
    format!("{prefix}ping")
}

/// Subject on which discovery announcements are published.
pub fn announcement(prefix: &str) -> String {
    format!("{prefix}announce")
}

/// Request subject for a verb at the given scope. Empty `app` or `node`
/// segments widen the scope.
pub fn request(prefix: &str, verb: Verb, app: &str, node: &str) -> String {
    format!("{prefix}{verb}.{app}.{node}")
}

/// The cluster, application, and node scopes for one verb, widest first.
pub fn scope_triple(prefix: &str, verb: Verb, app: &str, node: &str) -> [String; 3] {
    [
        request(prefix, verb, "", ""),
        request(prefix, verb, app, ""),
        request(prefix, verb, app, node),
    ]
}

/// Canonical event subject for an `(application, node)` pair.
pub fn event(prefix: &str, app: &str, node: &str) -> String {
    format!("{prefix}event.{app}.{node}")
}

/// Event subject scoped to a single dialog.
pub fn dialog_event(prefix: &str, dialog_id: &str) -> String {
    format!("{prefix}dialogevent.{dialog_id}")
}

/// Inverts [`request`]: splits a request subject into its verb, application,
/// and node segments. Returns `None` for subjects outside the prefix, with
/// an unknown verb, or with extra segments.
pub fn parse_request<'a>(prefix: &str, subject: &'a str) -> Option<(Verb, &'a str, &'a str)> {
    let rest = subject.strip_prefix(prefix)?;
    let mut segments = rest.splitn(3, '.');
    let verb = Verb::from_str(segments.next()?).ok()?;
    let app = segments.next()?;
    let node = segments.next()?;
    if node.contains('.') {
        return None;
    }
    Some((verb, app, node))
}
