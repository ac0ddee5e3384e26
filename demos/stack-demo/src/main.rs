// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Demonstration driver: reserve, push a run of values, dump, pop them
//! back and print, dump again, destruct.

use std::rc::Rc;

use parapet::{DiagnosticSink, Stack};
use parapet_probe::{MemProbe, OsProbe};
use parapet_report::LogReporter;

fn main() {
    let _log = match parapet_report::init("stack-demo.log") {
        Ok(guard) => Some(guard),
        Err(error) => {
            eprintln!("logging unavailable: {error}");
            None
        }
    };

    let probe: Rc<dyn MemProbe> = Rc::new(OsProbe::new());
    let sink: Rc<dyn DiagnosticSink> = Rc::new(LogReporter);
    let mut stack: Stack<i32> = Stack::with_diagnostics("demo", probe, sink);

    if let Err(faults) = stack.resize(30) {
        eprintln!("resize failed: {faults}");
    }
    stack.dump();

    for i in 0..21 {
        if let Err(faults) = stack.push(56 + i) {
            eprintln!("push failed: {faults}");
        }
    }
    stack.dump();

    for _ in 0..21 {
        match stack.pop() {
            Ok(value) => println!("{value}"),
            Err(faults) => eprintln!("pop failed: {faults}"),
        }
    }
    stack.dump();

    if let Err(faults) = stack.destruct() {
        eprintln!("destruct failed: {faults}");
    }
}
