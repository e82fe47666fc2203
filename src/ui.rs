//! Terminal output for schedules and the transition table.
//!
//! Uses `console` for colored styling. [`ScheduleView`] renders a
//! [`Schedule`] either as the human-readable report or as JSON.

use console::Style;

use crate::report::Schedule;
use crate::state_machine::{Tape, TransitionTable};

pub struct ScheduleView {
    // Headers and totals.
    bold: Style,
    // Machines that received work.
    green: Style,
    // Idle machines.
    yellow: Style,
    red: Style,
}

impl Default for ScheduleView {
    fn default() -> Self {
        Self {
            bold: Style::new().bold(),
            green: Style::new().green().bold(),
            yellow: Style::new().yellow(),
            red: Style::new().red().bold(),
        }
    }
}

impl ScheduleView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Formats the per-machine report.
    pub fn render(&self, schedule: &Schedule) -> String {
        let mut out = String::new();
        out.push_str(&format!("\n{}\n", self.bold.apply_to("Production Schedule:")));
        out.push_str(&"=".repeat(50));
        out.push('\n');

        for machine in &schedule.machines {
            let label = if machine.orders.is_empty() {
                self.yellow.apply_to(&machine.machine)
            } else {
                self.green.apply_to(&machine.machine)
            };
            out.push_str(&format!("\n{label}:\n"));
            out.push_str(&format!("Total time: {:.2} minutes\n", machine.total_time));
            if machine.orders.is_empty() {
                out.push_str("No orders assigned\n");
            } else {
                out.push_str("Orders:\n");
                for order in &machine.orders {
                    out.push_str(&format!(
                        "  Size: {:4} | Start: {:6.2}\n",
                        order.size, order.start_time
                    ));
                }
            }
        }

        out.push_str(&format!(
            "\n{} {:.2} minutes across {} orders\n",
            self.bold.apply_to("Makespan:"),
            schedule.makespan(),
            schedule.order_count()
        ));
        out
    }

    pub fn print(&self, schedule: &Schedule) {
        print!("{}", self.render(schedule));
    }

    pub fn print_json(&self, schedule: &Schedule) {
        println!(
            "{}",
            serde_json::to_string_pretty(schedule).unwrap_or_default()
        );
    }

    pub fn print_tape(&self, tape: &Tape) {
        println!("{} {tape}", self.bold.apply_to("Final tape:"));
    }

    pub fn print_table(&self, table: &TransitionTable) {
        println!("{}", self.bold.apply_to("state  read -> next   write move"));
        for (state, read, t) in table.rules() {
            println!(
                "{:<6} {:<4} -> {:<7} {:<5} {}",
                state.to_string(),
                read.to_string(),
                t.next_state.to_string(),
                t.write_symbol.to_string(),
                t.direction
            );
        }
    }

    pub fn print_error(&self, message: &str) {
        eprintln!("  {} {message}", self.red.apply_to("✗"));
    }
}
