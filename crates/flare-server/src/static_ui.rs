pub const UI_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Flare Incident Reports</title>
    <style>
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
            background: linear-gradient(135deg, #fdf2e9 0%, #f5cba7 100%);
            padding: 20px;
            color: #333;
        }
        .container {
            max-width: 900px;
            margin: 0 auto;
        }
        h1 {
            text-align: center;
            color: #922b21;
            margin-bottom: 30px;
            font-size: 2.2em;
        }
        .card {
            background: white;
            border-radius: 12px;
            padding: 20px;
            margin-bottom: 20px;
            box-shadow: 0 4px 6px rgba(0,0,0,0.1);
        }
        form label {
            display: block;
            margin: 12px 0 4px;
            font-weight: 600;
        }
        form input[type=text], form textarea, form select {
            width: 100%;
            padding: 8px;
            border: 1px solid #ccc;
            border-radius: 6px;
            font-size: 1em;
        }
        form button {
            margin-top: 16px;
            padding: 10px 24px;
            background: #c0392b;
            color: white;
            border: none;
            border-radius: 6px;
            font-size: 1em;
            cursor: pointer;
        }
        form button:hover {
            background: #922b21;
        }
        .error {
            color: #c0392b;
            margin-top: 10px;
        }
        .incident {
            border-bottom: 1px solid #eee;
            padding: 12px 0;
        }
        .incident:last-child {
            border-bottom: none;
        }
        .incident .badge {
            display: inline-block;
            padding: 2px 10px;
            border-radius: 10px;
            font-size: 0.8em;
            font-weight: 700;
            color: white;
            margin-right: 8px;
        }
        .badge.FIRE { background: #c0392b; }
        .badge.ELECTRICAL { background: #d68910; }
        .badge.HAZMAT { background: #1e8449; }
        .incident .when {
            color: #888;
            font-size: 0.85em;
        }
        .incident img {
            display: block;
            max-width: 240px;
            margin-top: 8px;
            border-radius: 6px;
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>Flare Incident Reports</h1>

        <div class="card">
            <form id="report-form">
                <label for="title">Title</label>
                <input type="text" id="title" name="title" required>

                <label for="description">Description</label>
                <textarea id="description" name="description" rows="3"></textarea>

                <label for="incident_type">Type</label>
                <select id="incident_type" name="incident_type">
                    <option value="FIRE">FIRE</option>
                    <option value="ELECTRICAL">ELECTRICAL</option>
                    <option value="HAZMAT">HAZMAT</option>
                </select>

                <label for="image">Photo</label>
                <input type="file" id="image" name="image" accept="image/*">

                <button type="submit">Report incident</button>
                <div class="error" id="error"></div>
            </form>
        </div>

        <div class="card">
            <div id="incident-list">Loading...</div>
        </div>
    </div>

    <script>
        const form = document.getElementById('report-form');
        const errorBox = document.getElementById('error');
        const list = document.getElementById('incident-list');

        async function refresh() {
            const res = await fetch('/api/incidents');
            const incidents = await res.json();
            if (incidents.length === 0) {
                list.textContent = 'No incidents reported yet.';
                return;
            }
            list.innerHTML = '';
            for (const incident of incidents) {
                const div = document.createElement('div');
                div.className = 'incident';

                const badge = document.createElement('span');
                badge.className = 'badge ' + incident.incident_type;
                badge.textContent = incident.incident_type;
                div.appendChild(badge);

                const title = document.createElement('strong');
                title.textContent = incident.title;
                div.appendChild(title);

                const when = document.createElement('div');
                when.className = 'when';
                when.textContent = new Date(incident.createdAt).toLocaleString();
                div.appendChild(when);

                if (incident.description) {
                    const desc = document.createElement('div');
                    desc.textContent = incident.description;
                    div.appendChild(desc);
                }
                if (incident.imageUrl) {
                    const img = document.createElement('img');
                    img.src = incident.imageUrl;
                    div.appendChild(img);
                }
                list.appendChild(div);
            }
        }

        form.addEventListener('submit', async (e) => {
            e.preventDefault();
            errorBox.textContent = '';
            const res = await fetch('/api/incidents', {
                method: 'POST',
                body: new FormData(form),
            });
            if (!res.ok) {
                const body = await res.json().catch(() => ({}));
                errorBox.textContent = body.error || 'Submission failed';
                return;
            }
            form.reset();
            refresh();
        });

        refresh();
        setInterval(refresh, 10000);
    </script>
</body>
</html>
"#;
