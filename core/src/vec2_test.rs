#[cfg(test)]
mod tests {
    use crate::vec2::{
        ADD_ITERS, CONSTRUCT_ADD_ITERS, DISTANCE_ITERS, REPETITIONS, Vec2, add_loop, construct_add_loop, distance_loop,
    };

    #[test]
    fn add_is_component_wise() {
        let a = Vec2::new(5.0, 5.0);
        let b = Vec2::new(10.0, 10.0);
        assert_eq!(a.add(b), Vec2::new(15.0, 15.0));
    }

    #[test]
    fn add_is_commutative() {
        let a = Vec2::new(5.0, 5.0);
        let b = Vec2::new(10.0, 10.0);
        assert_eq!(a.add(b), b.add(a));
    }

    #[test]
    fn distance_is_magnitude_of_the_component_sum() {
        let a = Vec2::new(5.0, 5.0);
        let b = Vec2::new(10.0, 10.0);
        // |a + b| = sqrt(15^2 + 15^2), not point-to-point distance.
        assert_eq!(a.distance(b), 450.0f64.sqrt());
        assert!((a.distance(b) - 21.213203435596427).abs() < 1e-12);
    }

    #[test]
    fn distance_is_symmetric_under_the_sum_convention() {
        let a = Vec2::new(3.0, -1.0);
        let b = Vec2::new(-7.0, 4.0);
        assert_eq!(a.distance(b), b.distance(a));
    }

    #[test]
    fn construct_add_loop_lands_on_the_fixed_sum() {
        assert_eq!(construct_add_loop(CONSTRUCT_ADD_ITERS), Vec2::new(15.0, 15.0));
    }

    #[test]
    fn add_loop_lands_on_the_fixed_sum() {
        let a = Vec2::new(5.0, 5.0);
        let b = Vec2::new(10.0, 10.0);
        assert_eq!(add_loop(a, b, ADD_ITERS), Vec2::new(15.0, 15.0));
    }

    #[test]
    fn distance_loop_accumulates_deterministically() {
        let a = Vec2::new(5.0, 5.0);
        let b = Vec2::new(10.0, 10.0);
        let total = distance_loop(a, b, DISTANCE_ITERS);
        // 1m additions of the same double, same order every run.
        assert_eq!(total, 21_213_203.435355574);
        assert_eq!(total, distance_loop(a, b, DISTANCE_ITERS));
    }

    #[test]
    fn vector_suites_run_ten_repetitions() {
        assert_eq!(REPETITIONS, 10);
    }
}
