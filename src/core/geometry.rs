//! Rein-mathematische Hilfsfunktionen für das Hit-Testing (Punkt, Strecke).

use glam::Vec2;

/// Euklidische Distanz zwischen zwei Punkten.
#[inline]
pub fn distance(p: Vec2, q: Vec2) -> f32 {
    p.distance(q)
}

/// Prüft, ob der Lotfußpunkt von `point` auf die Gerade `ab` innerhalb der Strecke liegt.
///
/// Kosinussatz-Test im Dreieck (a, point, b) mit A=|ab|, B=|b,point|, C=|point,a|:
/// `A² + B² >= C²` und `A² + C² >= B²`, d.h. keiner der Winkel an `a` bzw. `b` ist stumpf.
///
/// Für `a == b` ist A=0 und B=C, beide Ungleichungen gelten mit Gleichheit →
/// Ergebnis ist immer `true`.
pub fn lies_between(point: Vec2, a: Vec2, b: Vec2) -> bool {
    let a_sq = a.distance_squared(b);
    let b_sq = b.distance_squared(point);
    let c_sq = point.distance_squared(a);
    a_sq + b_sq >= c_sq && a_sq + c_sq >= b_sq
}

/// Abstand von `point` zur Strecke `ab`.
///
/// Liegt der Lotfußpunkt auf der Strecke, wird der senkrechte Abstand
/// (Kreuzprodukt / Länge) geliefert, sonst der Abstand zum näheren Endpunkt.
/// Bei `a == b` entspricht das Ergebnis `distance(point, a)`.
pub fn segment_distance(point: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let length = ab.length();
    if length <= f32::EPSILON {
        return distance(point, a);
    }

    if lies_between(point, a, b) {
        ab.perp_dot(point - a).abs() / length
    } else {
        distance(point, a).min(distance(point, b))
    }
}
