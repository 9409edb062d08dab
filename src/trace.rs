use crate::point::Point;

/// Write-only sink receiving every point a search pushes onto its frontier, in push order.
///
/// Recording never influences the search. `()` is the empty sink and compiles away entirely.
pub trait ExplorationTracer {
    fn record(&mut self, point: Point);
}

impl ExplorationTracer for () {
    #[inline(always)]
    fn record(&mut self, _: Point) {}
}

impl ExplorationTracer for Vec<Point> {
    fn record(&mut self, point: Point) {
        self.push(point);
    }
}

impl<T: ExplorationTracer + ?Sized> ExplorationTracer for &mut T {
    fn record(&mut self, point: Point) {
        (**self).record(point);
    }
}

impl<T: ExplorationTracer> ExplorationTracer for Option<T> {
    fn record(&mut self, point: Point) {
        if let Some(tracer) = self {
            tracer.record(point);
        }
    }
}
