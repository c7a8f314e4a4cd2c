//! Trace quality metrics (KPIs).
//!
//! Computes the classical per-process and aggregate CPU scheduling
//! indicators from a completed trace and its input processes.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | finish - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first run - arrival |
//! | Makespan | Latest finish time |
//! | CPU Utilization | busy time / makespan |
//! | Throughput | processes / makespan |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::{Policy, ProcessId, ProcessSet, Ticks, Trace};

/// Timing of one process under one policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Process identifier.
    pub id: ProcessId,
    /// Arrival time.
    pub arrival_time: Ticks,
    /// Burst time.
    pub burst_time: Ticks,
    /// First time on the CPU.
    pub start_time: Ticks,
    /// Completion time.
    pub finish_time: Ticks,
    /// finish - arrival.
    pub turnaround_time: Ticks,
    /// turnaround - burst.
    pub waiting_time: Ticks,
    /// start - arrival.
    pub response_time: Ticks,
}

/// Trace performance indicators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceKpi {
    /// Policy the trace came from.
    pub policy: Policy,
    /// Latest finish time.
    pub makespan: Ticks,
    /// Sum of idle periods.
    pub total_idle: Ticks,
    /// Ticks the CPU spent running processes.
    pub busy_time: Ticks,
    /// busy / makespan (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per tick.
    pub throughput: f64,
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Mean waiting time.
    pub avg_waiting: f64,
    /// Mean response time.
    pub avg_response: f64,
    /// Per-process metrics in input order.
    pub per_process: Vec<ProcessMetrics>,
}

impl TraceKpi {
    /// Computes KPIs from a trace and its input processes.
    ///
    /// Processes absent from the trace are skipped.
    pub fn calculate(trace: &Trace, processes: &ProcessSet) -> Self {
        let per_process: Vec<ProcessMetrics> = processes
            .processes()
            .iter()
            .filter_map(|p| {
                let start_time = trace.start_time(p.id)?;
                let finish_time = trace.finish_time(p.id)?;
                let turnaround_time = finish_time.saturating_sub(p.arrival_time);
                Some(ProcessMetrics {
                    id: p.id,
                    arrival_time: p.arrival_time,
                    burst_time: p.burst_time,
                    start_time,
                    finish_time,
                    turnaround_time,
                    waiting_time: turnaround_time.saturating_sub(p.burst_time),
                    response_time: start_time.saturating_sub(p.arrival_time),
                })
            })
            .collect();

        let makespan = trace.makespan();
        let total_idle = trace.total_idle();
        let busy_time = makespan.saturating_sub(total_idle);
        let count = per_process.len();

        let mean = |f: fn(&ProcessMetrics) -> Ticks| -> f64 {
            if count == 0 {
                0.0
            } else {
                per_process.iter().map(f).sum::<Ticks>() as f64 / count as f64
            }
        };

        let (cpu_utilization, throughput) = if makespan == 0 {
            (0.0, 0.0)
        } else {
            (
                busy_time as f64 / makespan as f64,
                count as f64 / makespan as f64,
            )
        };

        Self {
            policy: trace.policy,
            makespan,
            total_idle,
            busy_time,
            cpu_utilization,
            throughput,
            avg_turnaround: mean(|m| m.turnaround_time),
            avg_waiting: mean(|m| m.waiting_time),
            avg_response: mean(|m| m.response_time),
            per_process,
        }
    }

    /// Metrics for one process.
    pub fn metrics_for(&self, id: ProcessId) -> Option<&ProcessMetrics> {
        self.per_process.iter().find(|m| m.id == id)
    }
}
