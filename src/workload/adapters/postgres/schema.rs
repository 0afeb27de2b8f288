//! Diesel schema for workload persistence.

diesel::table! {
    /// Employees and their running workload totals.
    employees (emp_id) {
        /// Caller-assigned employee identifier.
        #[max_length = 255]
        emp_id -> Varchar,
        /// Hours of task time attributed to the employee.
        current_workload -> Float8,
        /// Hour mark at which the employee's queue drains.
        next_free_time -> Float8,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Tasks assigned to employees.
    tasks (task_id) {
        /// Sequence-derived task identifier.
        #[max_length = 255]
        task_id -> Varchar,
        /// Free-form description.
        description -> Text,
        /// Duration in hours.
        duration -> Float8,
        /// Assigned employee identifier.
        #[max_length = 255]
        assigned_to -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Insertion position, breaks ties between equal timestamps.
        insertion_order -> Int8,
    }
}

diesel::joinable!(tasks -> employees (assigned_to));
diesel::allow_tables_to_appear_in_same_query!(employees, tasks);
