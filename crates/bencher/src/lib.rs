use micro_packet::protocol::{Body, BuildError, HttpMessage};

/// A raw response loaded from `resources/response`.
#[derive(Debug, Copy, Clone)]
pub struct ResponseFixture {
    name: &'static str,
    group: FixtureGroup,
    content: &'static str,
}

impl ResponseFixture {
    pub const fn new(name: &'static str, group: FixtureGroup, content: &'static str) -> Self {
        Self { name, group, content }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn group(&self) -> FixtureGroup {
        self.group
    }

    pub fn content(&self) -> &'static str {
        self.content
    }
}

/// Request parameters to be serialized by the encoder benchmarks.
#[derive(Debug, Copy, Clone)]
pub struct RequestFixture {
    name: &'static str,
    group: FixtureGroup,
    method: &'static str,
    url: &'static str,
    headers: &'static [(&'static str, &'static str)],
    body: Option<&'static str>,
}

impl RequestFixture {
    pub const fn new(
        name: &'static str,
        group: FixtureGroup,
        method: &'static str,
        url: &'static str,
        headers: &'static [(&'static str, &'static str)],
        body: Option<&'static str>,
    ) -> Self {
        Self { name, group, method, url, headers, body }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn group(&self) -> FixtureGroup {
        self.group
    }

    /// Builds the message, sending the body as `text/plain` when there is one.
    ///
    /// # Errors
    ///
    /// Returns the [`BuildError`] of an invalid url or method.
    pub fn to_message(&self) -> Result<HttpMessage, BuildError> {
        let mut builder = HttpMessage::builder().method(self.method).url(self.url);
        for (key, value) in self.headers {
            builder = builder.header(*key, *value);
        }
        if let Some(body) = self.body {
            builder = builder.body(Body::text(body));
        }
        builder.build()
    }
}

#[derive(Clone, Copy, Debug)]
pub enum FixtureGroup {
    Small,
    Large,
}
