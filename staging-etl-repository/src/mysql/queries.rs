//! SQL used to extract payments.

/// Upper bound on rows extracted per run.
pub const EXTRACT_ROW_LIMIT: u32 = 500;

/// The payment join. The row limit is bound as the single parameter.
///
/// `amount` is selected as text so the DECIMAL value crosses the wire exactly.
pub(crate) const EXTRACT_PAYMENTS_QUERY: &str = r#"
SELECT
  p.payment_id,
  p.customer_id,
  p.staff_id,
  p.rental_id,
  CAST(p.amount AS CHAR) AS amount,
  p.payment_date,
  c.store_id,
  f.film_id,
  f.title,
  f.rating
FROM payment p
JOIN customer c ON p.customer_id = c.customer_id
JOIN rental r ON p.rental_id = r.rental_id
JOIN inventory i ON r.inventory_id = i.inventory_id
JOIN film f ON i.film_id = f.film_id
LIMIT ?
"#;
