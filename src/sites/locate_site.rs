use crate::types::site::Site;
use haversine::{distance, Location as HaversineLocation, Units};
use ordered_float::OrderedFloat;
use rstar::RTree;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Debug, Clone)]
pub struct SiteLocator {
    rtree: RTree<Site>,
}

fn distance_km(latitude: f64, longitude: f64, site: &Site) -> f64 {
    distance(
        HaversineLocation {
            latitude,
            longitude,
        },
        HaversineLocation {
            latitude: site.latitude,
            longitude: site.longitude,
        },
        Units::Kilometers,
    )
}

impl SiteLocator {
    pub fn new(sites: &[Site]) -> Self {
        SiteLocator {
            rtree: RTree::bulk_load(sites.to_vec()),
        }
    }

    pub fn len(&self) -> usize {
        self.rtree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.rtree.size() == 0
    }

    /// Finds up to `n_results` sites within `max_distance_km`, closest first, with
    /// great-circle distances in kilometres.
    pub fn query(
        &self,
        latitude: f64,
        longitude: f64,
        n_results: usize,
        max_distance_km: f64,
        active_only: bool,
    ) -> Vec<(Site, f64)> {
        if n_results == 0 {
            return vec![];
        }

        if !active_only {
            return self.proximity_query(latitude, longitude, n_results, max_distance_km);
        }

        self.active_heap_query(latitude, longitude, n_results, max_distance_km)
    }

    /// Takes a bounded number of R-tree neighbours, then filters and sorts by real distance.
    fn proximity_query(
        &self,
        latitude: f64,
        longitude: f64,
        n_results: usize,
        max_distance_km: f64,
    ) -> Vec<(Site, f64)> {
        // Planar and great-circle order can disagree slightly; over-fetch.
        let candidate_limit = (n_results * 2).max(20);

        let mut sites_with_dist: Vec<(Site, f64)> = self
            .rtree
            .nearest_neighbor_iter(&[latitude, longitude])
            .take(candidate_limit)
            .filter_map(|site| {
                let dist_km = distance_km(latitude, longitude, site);
                (dist_km <= max_distance_km).then(|| (site.to_owned(), dist_km))
            })
            .collect();

        sites_with_dist.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));
        sites_with_dist.truncate(n_results);
        sites_with_dist
    }

    /// Walks neighbours nearest-first, skipping closed sites, keeping the best
    /// `n_results` in a max-heap.
    fn active_heap_query(
        &self,
        latitude: f64,
        longitude: f64,
        n_results: usize,
        max_distance_km: f64,
    ) -> Vec<(Site, f64)> {
        // Max-heap of (distance, index into `kept`), so the farthest kept site is on top.
        let mut kept: Vec<&Site> = Vec::with_capacity(n_results);
        let mut heap: BinaryHeap<(OrderedFloat<f64>, usize)> = BinaryHeap::with_capacity(n_results);

        for site in self.rtree.nearest_neighbor_iter(&[latitude, longitude]) {
            if !site.active {
                continue;
            }

            let dist_km = distance_km(latitude, longitude, site);
            if dist_km * 2.0 > max_distance_km && heap.len() == n_results {
                break;
            }
            if dist_km > max_distance_km {
                continue;
            }

            let dist_km = OrderedFloat(dist_km);
            if heap.len() < n_results {
                heap.push((dist_km, kept.len()));
                kept.push(site);
            } else if heap.peek().is_some_and(|(worst, _)| dist_km < *worst) {
                if let Some((_, slot)) = heap.pop() {
                    kept[slot] = site;
                    heap.push((dist_km, slot));
                }
            }
        }

        heap.into_sorted_vec()
            .into_iter()
            .map(|(dist_km, slot)| (kept[slot].to_owned(), dist_km.into_inner()))
            .collect()
    }
}
