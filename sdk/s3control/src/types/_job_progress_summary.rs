/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Describes the total number of tasks that the specified job has started, the number of tasks that succeeded, and the number of tasks that failed.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct JobProgressSummary {
    /// <p>The total number of tasks in the job.</p>
    pub total_number_of_tasks: ::std::option::Option<i64>,
    /// <p>The number of tasks that succeeded.</p>
    pub number_of_tasks_succeeded: ::std::option::Option<i64>,
    /// <p>The number of tasks that failed.</p>
    pub number_of_tasks_failed: ::std::option::Option<i64>,
}
impl JobProgressSummary {
    /// <p>The total number of tasks in the job.</p>
    pub fn total_number_of_tasks(&self) -> ::std::option::Option<i64> {
        self.total_number_of_tasks
    }
    /// <p>The number of tasks that succeeded.</p>
    pub fn number_of_tasks_succeeded(&self) -> ::std::option::Option<i64> {
        self.number_of_tasks_succeeded
    }
    /// <p>The number of tasks that failed.</p>
    pub fn number_of_tasks_failed(&self) -> ::std::option::Option<i64> {
        self.number_of_tasks_failed
    }
}
impl JobProgressSummary {
    /// Creates a new builder-style object to manufacture [`JobProgressSummary`](crate::types::JobProgressSummary).
    pub fn builder() -> crate::types::builders::JobProgressSummaryBuilder {
        crate::types::builders::JobProgressSummaryBuilder::default()
    }
}

/// A builder for [`JobProgressSummary`](crate::types::JobProgressSummary).
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct JobProgressSummaryBuilder {
    pub(crate) total_number_of_tasks: ::std::option::Option<i64>,
    pub(crate) number_of_tasks_succeeded: ::std::option::Option<i64>,
    pub(crate) number_of_tasks_failed: ::std::option::Option<i64>,
}
impl JobProgressSummaryBuilder {
    /// <p>The total number of tasks in the job.</p>
    pub fn total_number_of_tasks(mut self, input: i64) -> Self {
        self.total_number_of_tasks = ::std::option::Option::Some(input);
        self
    }
    /// <p>The total number of tasks in the job.</p>
    pub fn set_total_number_of_tasks(mut self, input: ::std::option::Option<i64>) -> Self {
        self.total_number_of_tasks = input;
        self
    }
    /// <p>The total number of tasks in the job.</p>
    pub fn get_total_number_of_tasks(&self) -> &::std::option::Option<i64> {
        &self.total_number_of_tasks
    }
    /// <p>The number of tasks that succeeded.</p>
    pub fn number_of_tasks_succeeded(mut self, input: i64) -> Self {
        self.number_of_tasks_succeeded = ::std::option::Option::Some(input);
        self
    }
    /// <p>The number of tasks that succeeded.</p>
    pub fn set_number_of_tasks_succeeded(mut self, input: ::std::option::Option<i64>) -> Self {
        self.number_of_tasks_succeeded = input;
        self
    }
    /// <p>The number of tasks that succeeded.</p>
    pub fn get_number_of_tasks_succeeded(&self) -> &::std::option::Option<i64> {
        &self.number_of_tasks_succeeded
    }
    /// <p>The number of tasks that failed.</p>
    pub fn number_of_tasks_failed(mut self, input: i64) -> Self {
        self.number_of_tasks_failed = ::std::option::Option::Some(input);
        self
    }
    /// <p>The number of tasks that failed.</p>
    pub fn set_number_of_tasks_failed(mut self, input: ::std::option::Option<i64>) -> Self {
        self.number_of_tasks_failed = input;
        self
    }
    /// <p>The number of tasks that failed.</p>
    pub fn get_number_of_tasks_failed(&self) -> &::std::option::Option<i64> {
        &self.number_of_tasks_failed
    }
    /// Consumes the builder and constructs a [`JobProgressSummary`](crate::types::JobProgressSummary).
    pub fn build(self) -> crate::types::JobProgressSummary {
        crate::types::JobProgressSummary {
            total_number_of_tasks: self.total_number_of_tasks,
            number_of_tasks_succeeded: self.number_of_tasks_succeeded,
            number_of_tasks_failed: self.number_of_tasks_failed,
        }
    }
}
