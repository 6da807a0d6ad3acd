//! Static upload form.

use axum::response::Html;

const FORM_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>DNSSEC portfolio check</title>
</head>
<body>
<h1>Select a <em>CSV</em> file with domain names</h1>
<form action="/upload" method="POST" enctype="multipart/form-data">
<input type="file" name="domainlist">
<input type="submit" value="Check">
</form>
<h2>FAQ</h2>
<dl>
<dt>How are names checked?</dt>
<dd>The first column of every line of the uploaded CSV file is checked, whatever
its top-level domain. Each name gets an NS lookup through a validating resolver,
so a random selection of its nameservers is queried; there is no guarantee that
every secondary nameserver is checked.</dd>

<dt>What does the output look like?</dt>
<dd>One CSV line per name:
<p><code>domain name, DNS error, security status, validation error if bogus</code></p>
The security status is one of
<ul>
<li><b>secure</b>: the name is correctly protected with DNSSEC</li>
<li><b>bogus</b>: the name is signed but DNSSEC validation fails</li>
<li><b>insecure</b>: the name is not protected with DNSSEC</li>
</ul>
The DNS error column holds the resolver error when the lookup failed, or
<b>nodata</b> when no records were found. Results are ordered so that failed
lookups and bogus names come first and secure names last.</dd>

<dt>Can I check a single name?</dt>
<dd>Upload a file containing one name, or use <code>/check/&lt;domain&gt;</code>,
for example <a href="/check/example.nl">/check/example.nl</a>. The output has the
same CSV format.</dd>
</dl>
</body>
</html>
"#;

/// `GET /form`: upload form and FAQ.
pub async fn form_handler() -> Html<&'static str> {
    Html(FORM_PAGE)
}
