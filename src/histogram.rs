/// Equal width bins histogram
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// bins lower edges and the upper edge of the last bin
    edges: Vec<f64>,
    counts: Vec<usize>,
}
impl Histogram {
    /// Bins the finite `values` into `n_bin` bins spanning their range
    ///
    /// Bins are half-open except the last one which includes the maximum.
    /// A degenerate range `[v,v]` is widened to `[v-0.5,v+0.5]`.
    /// Returns `None` if there are no finite values or `n_bin` is zero.
    pub fn new<I: IntoIterator<Item = f64>>(values: I, n_bin: usize) -> Option<Self> {
        let values: Vec<f64> = values.into_iter().filter(|x| x.is_finite()).collect();
        if values.is_empty() || n_bin == 0 {
            return None;
        }
        let (mut lo, mut hi) = (
            values.iter().cloned().fold(f64::INFINITY, f64::min),
            values.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
        );
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }
        let n = n_bin as f64;
        // hi - lo may overflow, hi/n - lo/n cannot
        let width = hi / n - lo / n;
        if !(width.is_finite() && width > 0.) {
            return None;
        }
        let edges: Vec<f64> = (0..=n_bin)
            .map(|k| {
                let t = k as f64 / n;
                lo * (1. - t) + hi * t
            })
            .collect();
        let mut counts = vec![0usize; n_bin];
        for x in values {
            let k = ((x / width - lo / width) as usize).min(n_bin - 1);
            counts[k] += 1;
        }
        Some(Self { edges, counts })
    }
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }
    /// Iterator over the (lower edge, upper edge, count) of each bin
    pub fn bins(&self) -> impl Iterator<Item = (f64, f64, usize)> + '_ {
        self.edges
            .windows(2)
            .zip(self.counts.iter())
            .map(|(e, &c)| (e[0], e[1], c))
    }
    pub fn range(&self) -> (f64, f64) {
        (self.edges[0], self.edges[self.edges.len() - 1])
    }
    pub fn max_count(&self) -> usize {
        self.counts.iter().cloned().max().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_bins() {
        let values: Vec<f64> = (0..=100).map(|x| x as f64).collect();
        let hist = Histogram::new(values, 20).unwrap();
        assert_eq!(hist.counts().len(), 20);
        assert_eq!(hist.edges().len(), 21);
        assert_eq!(hist.counts().iter().sum::<usize>(), 101);
        assert_eq!(hist.range(), (0., 100.));
        // 95..=100 lands in the last bin
        assert_eq!(hist.counts()[19], 6);
        assert_eq!(hist.counts()[0], 5);
    }

    #[test]
    fn non_finite_values_are_skipped() {
        let hist = Histogram::new(vec![1., f64::NAN, 2., f64::INFINITY, 3.], 2).unwrap();
        assert_eq!(hist.counts(), &[1, 2]);
    }

    #[test]
    fn degenerate_range() {
        let hist = Histogram::new(vec![2.; 4], 4).unwrap();
        assert_eq!(hist.range(), (1.5, 2.5));
        assert_eq!(hist.counts(), &[0, 0, 4, 0]);
        assert_eq!(hist.max_count(), 4);
    }

    #[test]
    fn range_wider_than_f64_max() {
        let hist = Histogram::new(vec![-1e308, 0., 1e308], 20).unwrap();
        assert!(hist.edges().iter().all(|e| e.is_finite()));
        assert!(hist.edges().windows(2).all(|e| e[0] < e[1]));
        assert_eq!(hist.range(), (-1e308, 1e308));
        assert_eq!(hist.counts().iter().sum::<usize>(), 3);
        assert_eq!(hist.counts()[0], 1);
        assert_eq!(hist.counts()[19], 1);
    }

    #[test]
    fn nothing_to_bin() {
        assert!(Histogram::new(Vec::<f64>::new(), 20).is_none());
        assert!(Histogram::new(vec![1.], 0).is_none());
    }
}
