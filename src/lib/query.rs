//! The SQL answer submitted by the workflow.

/// For every employee, counts the colleagues in the same department who were
/// born later than them.
pub const FINAL_QUERY: &str = "SELECT
    e1.EMP_ID,
    e1.FIRST_NAME,
    e1.LAST_NAME,
    d.DEPARTMENT_NAME,
    COUNT(e2.EMP_ID) AS YOUNGER_EMPLOYEES_COUNT
FROM
    EMPLOYEE e1
INNER JOIN
    DEPARTMENT d ON e1.DEPARTMENT = d.DEPARTMENT_ID
LEFT JOIN
    EMPLOYEE e2 ON e1.DEPARTMENT = e2.DEPARTMENT
    AND e2.DOB > e1.DOB
GROUP BY
    e1.EMP_ID,
    e1.FIRST_NAME,
    e1.LAST_NAME,
    d.DEPARTMENT_NAME
ORDER BY
    e1.EMP_ID DESC";

/// Returns the query to submit.
pub fn final_query() -> &'static str {
    FINAL_QUERY
}
