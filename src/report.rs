//! Console rendering of traces and KPIs.
//!
//! Renderers write into any [`fmt::Write`] sink so callers can target a
//! `String`, a formatter, or (via a small adapter) stdout.

use std::fmt::{self, Write};

use crate::models::{EventKind, Trace};
use crate::scheduler::{SimulationReport, TraceKpi};

/// Writes the classic per-policy listing.
///
/// Only completions are listed for non-preemptive policies; preemptive
/// traces also list every tick a process held the CPU.
pub fn render_trace<W: Write>(out: &mut W, trace: &Trace) -> fmt::Result {
    writeln!(out, "\n--- {} ---", trace.policy.title())?;
    for event in &trace.events {
        if matches!(event.kind, EventKind::Finished | EventKind::ResumedTick) {
            writeln!(out, "{event}")?;
        }
    }
    Ok(())
}

/// Writes a one-line Gantt chart with idle gaps, e.g. `0 |P1| 5 |idle| 7 |P2| 10`.
pub fn render_gantt<W: Write>(out: &mut W, trace: &Trace) -> fmt::Result {
    let segments = trace.segments();
    let Some(first) = segments.first() else {
        return writeln!(out, "(empty)");
    };

    let mut now = 0;
    if first.start > 0 {
        write!(out, "0 |idle| ")?;
        now = first.start;
    }
    write!(out, "{now}")?;
    for seg in &segments {
        if seg.start > now {
            write!(out, " |idle| {}", seg.start)?;
        }
        write!(out, " |P{}| {}", seg.process_id, seg.end)?;
        now = seg.end;
    }
    writeln!(out)
}

/// Writes a per-process metrics table followed by averages.
pub fn render_kpi<W: Write>(out: &mut W, kpi: &TraceKpi) -> fmt::Result {
    writeln!(
        out,
        "{:>4} {:>8} {:>6} {:>6} {:>7} {:>11} {:>8} {:>9}",
        "PID", "Arrival", "Burst", "Start", "Finish", "Turnaround", "Waiting", "Response"
    )?;
    for m in &kpi.per_process {
        writeln!(
            out,
            "{:>4} {:>8} {:>6} {:>6} {:>7} {:>11} {:>8} {:>9}",
            m.id,
            m.arrival_time,
            m.burst_time,
            m.start_time,
            m.finish_time,
            m.turnaround_time,
            m.waiting_time,
            m.response_time
        )?;
    }
    writeln!(
        out,
        "Average turnaround: {:.2}, waiting: {:.2}, response: {:.2}",
        kpi.avg_turnaround, kpi.avg_waiting, kpi.avg_response
    )?;
    writeln!(
        out,
        "Makespan: {}, idle: {}, CPU utilization: {:.1}%, throughput: {:.3}/tick",
        kpi.makespan,
        kpi.total_idle,
        kpi.cpu_utilization * 100.0,
        kpi.throughput
    )
}

/// Writes every run of a report: listing, Gantt chart, and KPI table.
pub fn render_report<W: Write>(out: &mut W, report: &SimulationReport) -> fmt::Result {
    for run in &report.runs {
        render_trace(out, &run.trace)?;
        writeln!(out)?;
        render_gantt(out, &run.trace)?;
        render_kpi(out, &run.kpi)?;
    }
    Ok(())
}
