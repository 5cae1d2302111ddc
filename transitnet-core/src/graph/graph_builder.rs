use super::{DistanceCalculationPolicy, EdgeUpdate, GraphBuild, GraphError, StopPair, TransitGraph};
use crate::model::{ScheduleModel, StopTime, Trip};
use itertools::Itertools;
use std::collections::BinaryHeap;
use uom::si::length::kilometer;

/// builds the stop connectivity graph for a schedule in a single pass over its trips.
///
/// every stop becomes a node. each pair of consecutive stop visits in a trip becomes
/// an undirected edge weighted by the distance between the two stops, where repeated
/// observations of the same pair keep the minimum distance and the union of routes.
///
/// trips whose stop sequence is malformed are left out and reported on the returned
/// [`GraphBuild`]; the remaining trips are still processed. consecutive visits to the
/// same stop are logged and dropped.
pub fn build(
    schedule: &ScheduleModel,
    distance_policy: &DistanceCalculationPolicy,
) -> Result<GraphBuild, GraphError> {
    let mut graph = TransitGraph::new(schedule.stops().keys().cloned());
    let mut skipped_trips = vec![];
    let mut rejected_self_loops = 0;
    let mut merged_hops = 0;

    for trip in schedule.trips().values() {
        let stop_times = match get_ordered_stop_times(trip) {
            Ok(stop_times) => stop_times,
            Err(e) => {
                log::warn!("skipping trip during graph construction: {e}");
                skipped_trips.push(e);
                continue;
            }
        };

        for (src, dst) in stop_times.iter().tuple_windows() {
            if StopPair::new(src.stop_id.clone(), dst.stop_id.clone()).is_loop() {
                log::warn!(
                    "trip '{}' visits stop '{}' twice in a row (sequence {} -> {}), ignoring self-loop",
                    trip.trip_id,
                    src.stop_id,
                    src.stop_sequence,
                    dst.stop_sequence
                );
                rejected_self_loops += 1;
                continue;
            }
            let src_stop = schedule
                .get_stop(&src.stop_id)
                .ok_or_else(|| GraphError::ScheduleMissingStop(src.stop_id.clone()))?;
            let dst_stop = schedule
                .get_stop(&dst.stop_id)
                .ok_or_else(|| GraphError::ScheduleMissingStop(dst.stop_id.clone()))?;
            let distance = distance_policy
                .distance(src_stop.point(), dst_stop.point())
                .get::<kilometer>();
            if let EdgeUpdate::Merged =
                graph.upsert_edge(&src.stop_id, &dst.stop_id, distance, &trip.route_id)?
            {
                merged_hops += 1;
            }
        }
    }

    log::info!(
        "built transit graph with {} nodes and {} edges from {} trips ({} skipped, {} hops merged)",
        graph.n_nodes(),
        graph.n_edges(),
        schedule.trips().len(),
        skipped_trips.len(),
        merged_hops
    );

    Ok(GraphBuild {
        graph,
        skipped_trips,
        rejected_self_loops,
        merged_hops,
        n_trips: schedule.trips().len(),
    })
}

/// returns the stop times of a trip in ascending sequence order, confirming that
/// the sequence starts at 1 and has no gaps or repeats, and that times never run
/// backwards along the trip.
pub fn get_ordered_stop_times(trip: &Trip) -> Result<Vec<&StopTime>, GraphError> {
    let malformed = |reason: String| GraphError::MalformedTrip {
        trip_id: trip.trip_id.clone(),
        reason,
    };

    let stop_queue_order: BinaryHeap<(u32, usize)> = trip
        .stop_times
        .iter()
        .enumerate()
        .map(|(i, st)| (st.stop_sequence, i))
        .collect();
    let ordered = stop_queue_order
        .into_sorted_vec()
        .into_iter()
        .map(|(_, idx)| &trip.stop_times[idx])
        .collect::<Vec<_>>();

    for (expected, st) in (1u32..).zip(ordered.iter()) {
        if st.stop_sequence != expected {
            return Err(malformed(format!(
                "expected stop_sequence {expected} but found {} at stop '{}'",
                st.stop_sequence, st.stop_id
            )));
        }
        if st.arrival > st.departure {
            return Err(malformed(format!(
                "arrival {} is after departure {} at stop '{}'",
                st.arrival, st.departure, st.stop_id
            )));
        }
    }
    for (prev, next) in ordered.iter().tuple_windows() {
        if prev.departure > next.arrival {
            return Err(malformed(format!(
                "departure {} from stop '{}' is after arrival {} at stop '{}'",
                prev.departure, prev.stop_id, next.arrival, next.stop_id
            )));
        }
    }

    Ok(ordered)
}
